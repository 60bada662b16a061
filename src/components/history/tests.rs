use super::*;
use crate::canvas::Color;

#[test]
fn test_history_undo_redo_single_set() {
    let mut canvas = PixelBuffer::new(4, 4);
    let mut h = HistoryManager::default();

    h.checkpoint(&canvas);
    canvas.set(1, 1, Color::BLACK);

    assert!(h.undo(&mut canvas));
    assert_eq!(canvas.get(1, 1), Color::WHITE);
    assert!(h.can_redo());

    assert!(h.redo(&mut canvas));
    assert_eq!(canvas.get(1, 1), Color::BLACK);
    assert!(h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn test_history_new_edit_clears_redo() {
    let mut canvas = PixelBuffer::new(4, 4);
    let mut h = HistoryManager::default();

    h.checkpoint(&canvas);
    canvas.set(0, 0, Color::BLACK);
    h.undo(&mut canvas);
    assert_eq!(h.redo_count(), 1);

    h.checkpoint(&canvas);
    canvas.set(2, 2, Color::BLACK);
    assert_eq!(h.redo_count(), 0);
    assert!(!h.redo(&mut canvas));
    assert_eq!(canvas.get(0, 0), Color::WHITE);
}

#[test]
fn test_history_empty_is_noop() {
    let mut canvas = PixelBuffer::new(2, 2);
    let before = canvas.clone();
    let mut h = HistoryManager::default();
    assert!(!h.undo(&mut canvas));
    assert!(!h.redo(&mut canvas));
    assert_eq!(canvas, before);
}

#[test]
fn test_history_capacity_drops_oldest() {
    let mut canvas = PixelBuffer::new(2, 1);
    let mut h = HistoryManager::default();

    for i in 0..(MAX_UNDO + 5) {
        h.checkpoint(&canvas);
        canvas.set(0, 0, Color::rgb(i as u8, 0, 0));
    }
    assert_eq!(h.undo_count(), MAX_UNDO);

    for _ in 0..MAX_UNDO {
        assert!(h.undo(&mut canvas));
    }
    // Oldest surviving snapshot was taken after 5 edits.
    assert_eq!(canvas.get(0, 0), Color::rgb(4, 0, 0));

    let before = canvas.clone();
    assert!(!h.undo(&mut canvas));
    assert_eq!(canvas, before);
}

#[test]
fn test_history_small_capacity() {
    let mut canvas = PixelBuffer::new(1, 1);
    let mut h = HistoryManager::new(2);
    for _ in 0..2 {
        h.checkpoint(&canvas);
    }
    h.undo(&mut canvas);
    h.checkpoint(&canvas);
    h.checkpoint(&canvas);
    assert_eq!(h.undo_count(), 2);
}

#[test]
fn test_history_memory_usage() {
    let canvas = PixelBuffer::new(8, 8);
    let mut h = HistoryManager::default();
    h.checkpoint(&canvas);
    h.checkpoint(&canvas);
    assert_eq!(h.memory_usage(), 2 * 64 * 4);

    // Undone entries still count until a new edit drops them.
    let mut canvas = canvas;
    assert!(h.undo(&mut canvas));
    assert_eq!(h.memory_usage(), 2 * 64 * 4);
    h.checkpoint(&canvas);
    assert_eq!(h.memory_usage(), 2 * 64 * 4);
    assert!(!h.can_redo());
}
