use super::*;

const RED: Color = Color::rgb(255, 0, 0);

#[test]
fn test_fill_uniform_buffer() {
    for (sx, sy) in [(0, 0), (6, 3), (9, 4)] {
        let mut buf = PixelBuffer::new(10, 5);
        let painted = flood_fill(&mut buf, sx, sy, RED);
        assert_eq!(painted, 50);
        assert!(buf.pixels().iter().all(|&c| c == RED));
    }
}

#[test]
fn test_fill_same_color_is_noop() {
    let mut buf = PixelBuffer::new(6, 6);
    buf.set(2, 2, RED);
    let before = buf.clone();
    assert_eq!(flood_fill(&mut buf, 0, 0, Color::WHITE), 0);
    assert_eq!(flood_fill(&mut buf, 2, 2, RED), 0);
    assert_eq!(buf, before);
}

#[test]
fn test_fill_out_of_bounds_seed_is_noop() {
    let mut buf = PixelBuffer::new(3, 3);
    let before = buf.clone();
    assert_eq!(flood_fill(&mut buf, -1, 0, RED), 0);
    assert_eq!(flood_fill(&mut buf, 3, 3, RED), 0);
    assert_eq!(buf, before);
}

#[test]
fn test_fill_does_not_cross_diagonals() {
    // Checkerboard: every white cell touches other whites only diagonally.
    let mut buf = PixelBuffer::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            if (x + y) % 2 == 1 {
                buf.set(x, y, Color::BLACK);
            }
        }
    }
    assert_eq!(flood_fill(&mut buf, 0, 0, RED), 1);
    assert_eq!(buf.get(0, 0), RED);
    assert_eq!(buf.get(1, 1), Color::WHITE);
    assert_eq!(buf.get(1, 0), Color::BLACK);
}

#[test]
fn test_fill_stops_at_boundary() {
    // Closed square outline from (2,2) to (6,6) in a 10x10 buffer.
    let mut buf = PixelBuffer::new(10, 10);
    crate::ops::shapes::draw_rect(&mut buf, 2, 2, 6, 6, Color::BLACK);

    assert_eq!(flood_fill(&mut buf, 4, 4, RED), 9);
    assert_eq!(buf.get(3, 3), RED);
    assert_eq!(buf.get(5, 5), RED);
    assert_eq!(buf.get(2, 2), Color::BLACK);
    assert_eq!(buf.get(1, 1), Color::WHITE);
    assert_eq!(buf.get(7, 7), Color::WHITE);
}

#[test]
fn test_fill_transparent_region_stays_inside() {
    let mut buf = PixelBuffer::new_filled(5, 5, Color::TRANSPARENT);
    let painted = flood_fill(&mut buf, 2, 2, RED);
    assert_eq!(painted, 25);
    assert!(buf.pixels().iter().all(|&c| c == RED));
}

#[test]
fn test_fill_exact_color_match() {
    let mut buf = PixelBuffer::new(3, 1);
    buf.set(1, 0, Color::new(255, 255, 255, 254));
    assert_eq!(flood_fill(&mut buf, 0, 0, RED), 1);
    assert_eq!(buf.get(2, 0), Color::WHITE);
}

#[test]
fn test_fill_large_region_without_recursion() {
    let mut buf = PixelBuffer::new(512, 512);
    assert_eq!(flood_fill(&mut buf, 256, 256, RED), 512 * 512);
}
