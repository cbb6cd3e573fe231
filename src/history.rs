//! Snapshot-based undo/redo.
//!
//! The undo stack is bounded: pushing onto a full stack evicts the oldest
//! snapshot. The redo stack is unbounded but is dropped whenever a new edit
//! is committed.

use std::collections::VecDeque;

use crate::buffer::Snapshot;

/// Default number of undo steps kept.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.saturating_add(1).min(64)),
            redo: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Record the pre-edit state of a new edit: push it for undo and
    /// invalidate everything that could have been redone.
    pub fn commit(&mut self, before: Snapshot) {
        self.push_undo(before);
        if !self.redo.is_empty() {
            tracing::trace!(dropped = self.redo.len(), "redo history cleared");
            self.redo.clear();
        }
    }

    /// Step back: `current` goes onto the redo stack and the most recent
    /// undo snapshot is returned. `None` (and no change) if there is nothing
    /// to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again, symmetric to [`History::undo`].
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.push_undo(current);
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
            tracing::trace!(capacity = self.capacity, "evicted oldest undo snapshot");
        }
    }
}
