// ============================================================================
// SHAPE RASTERIZATION: integer point sequences for lines, rectangles, circles
// ============================================================================
//
// The generators are pure: they only list grid cells. Committing a shape and
// previewing it both go through `ShapeKind::points`, the difference is only
// whether the caller writes the result into a buffer or paints it as overlay.

use crate::canvas::{Color, PixelBuffer, Point};

/// Shapes drawn by dragging from a start cell to an end cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    /// Centered on the drag start, radius is the drag distance.
    Circle,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }

    /// Cells covered by the shape dragged from `start` to `end`.
    pub fn points(&self, start: Point, end: Point) -> Vec<Point> {
        match self {
            ShapeKind::Line => line_points(start.x, start.y, end.x, end.y),
            ShapeKind::Rectangle => rect_points(start.x, start.y, end.x, end.y),
            ShapeKind::Circle => circle_points(start.x, start.y, drag_radius(start, end)),
        }
    }
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included,
/// ordered from start to end.
pub fn line_points(mut x0: i32, mut y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut pts = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        pts.push(Point::new(x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
    pts
}

/// Outline of the rectangle spanned by two opposite corners (any order).
///
/// Top and bottom rows come first, pairwise per column; then the side columns
/// without their corner cells.
pub fn rect_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let (x0, x1) = (x0.min(x1), x0.max(x1));
    let (y0, y1) = (y0.min(y1), y0.max(y1));

    let mut pts = Vec::new();
    for x in x0..=x1 {
        pts.push(Point::new(x, y0));
        pts.push(Point::new(x, y1));
    }
    for y in (y0 + 1)..y1 {
        pts.push(Point::new(x0, y));
        pts.push(Point::new(x1, y));
    }
    pts
}

/// Midpoint circle around `(cx, cy)`. A radius of zero or less yields just the
/// center. Cells on octant boundaries may appear more than once.
pub fn circle_points(cx: i32, cy: i32, radius: i32) -> Vec<Point> {
    if radius <= 0 {
        return vec![Point::new(cx, cy)];
    }

    let mut pts = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        pts.push(Point::new(cx + x, cy + y));
        pts.push(Point::new(cx - x, cy + y));
        pts.push(Point::new(cx + x, cy - y));
        pts.push(Point::new(cx - x, cy - y));
        pts.push(Point::new(cx + y, cy + x));
        pts.push(Point::new(cx - y, cy + x));
        pts.push(Point::new(cx + y, cy - x));
        pts.push(Point::new(cx - y, cy - x));
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    pts
}

/// Euclidean drag distance rounded to the nearest cell.
pub fn drag_radius(start: Point, end: Point) -> i32 {
    let dx = (end.x - start.x) as f64;
    let dy = (end.y - start.y) as f64;
    (dx * dx + dy * dy).sqrt().round() as i32
}

/// Write `color` at every point. Points outside the buffer are skipped.
pub fn plot(buffer: &mut PixelBuffer, points: &[Point], color: Color) {
    for p in points {
        buffer.set(p.x, p.y, color);
    }
}

pub fn draw_line(buffer: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    plot(buffer, &line_points(x0, y0, x1, y1), color);
}

pub fn draw_rect(buffer: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    plot(buffer, &rect_points(x0, y0, x1, y1), color);
}

pub fn draw_circle(buffer: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    plot(buffer, &circle_points(cx, cy, radius), color);
}
