use std::collections::VecDeque;

use crate::canvas::{PixelBuffer, Snapshot};

// ============================================================================
// HISTORY MANAGER: whole-canvas snapshot undo/redo
// ============================================================================

/// Default number of undo steps kept before the oldest is discarded.
pub const MAX_UNDO: usize = 100;

/// Linear undo/redo history of full-buffer snapshots.
///
/// `push` records the state *before* an edit. `undo` and `redo` swap the
/// current pixels with the top of the opposite stack, so every snapshot is
/// either on exactly one stack or applied to the buffer.
pub struct HistoryManager {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_history_size: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(MAX_UNDO)
    }
}

impl HistoryManager {
    pub fn new(max_history_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_history_size,
        }
    }

    /// Record the pre-edit state. Any redo chain is dropped.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.redo_stack.clear();
        self.undo_stack.push_back(snapshot);
        self.prune();
    }

    /// Capture `canvas` and push it.
    pub fn checkpoint(&mut self, canvas: &PixelBuffer) {
        self.push(canvas.snapshot());
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self, canvas: &mut PixelBuffer) -> bool {
        if let Some(snapshot) = self.undo_stack.pop_back() {
            self.redo_stack.push_back(canvas.snapshot());
            canvas.restore(&snapshot);
            true
        } else {
            false
        }
    }

    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self, canvas: &mut PixelBuffer) -> bool {
        if let Some(snapshot) = self.redo_stack.pop_back() {
            self.undo_stack.push_back(canvas.snapshot());
            self.prune();
            canvas.restore(&snapshot);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Bytes held by both stacks.
    pub fn memory_usage(&self) -> usize {
        self.undo_stack
            .iter()
            .chain(self.redo_stack.iter())
            .map(Snapshot::memory_bytes)
            .sum()
    }

    fn prune(&mut self) {
        while self.undo_stack.len() > self.max_history_size {
            self.undo_stack.pop_front();
        }
    }
}

#[cfg(test)]
mod tests;
