use std::collections::VecDeque;

use crate::canvas::{Color, PixelBuffer, Point};

/// South, north, east, west (screen space, y grows downward).
const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// 4-connected flood fill, in place.
///
/// Repaints the region of cells that share the seed's color and are reachable
/// from the seed through north/south/east/west steps. A cell is painted the
/// moment it is discovered, so a repainted cell no longer matches the target
/// color and is never queued again.
///
/// Returns the number of cells repainted: zero when the seed lies outside the
/// buffer or already has `color`.
pub fn flood_fill(buffer: &mut PixelBuffer, x: i32, y: i32, color: Color) -> usize {
    if !buffer.in_bounds(x, y) {
        return 0;
    }
    let target = buffer.get(x, y);
    if target == color {
        return 0;
    }

    let mut queue = VecDeque::with_capacity(1024);
    buffer.set(x, y, color);
    queue.push_back(Point::new(x, y));
    let mut painted = 1;

    while let Some(p) = queue.pop_front() {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (p.x + dx, p.y + dy);
            // Out-of-bounds reads return TRANSPARENT, so the bounds check must
            // come first or a transparent target would leak past the edge.
            if buffer.in_bounds(nx, ny) && buffer.get(nx, ny) == target {
                buffer.set(nx, ny, color);
                queue.push_back(Point::new(nx, ny));
                painted += 1;
            }
        }
    }
    painted
}

#[cfg(test)]
mod tests;
