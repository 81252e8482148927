//! Undo/redo over full-canvas snapshots.

use std::collections::VecDeque;

use crate::canvas::{PixelGrid, Snapshot};

/// Two bounded stacks of full-grid snapshots. Every tracked edit pushes the
/// pre-edit state and invalidates the redo stack; branching history is not
/// supported. An optional depth limit evicts the oldest undo entries first.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    depth_limit: Option<usize>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth_limit(depth_limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            depth_limit: Some(depth_limit.max(1)),
        }
    }

    /// Records the grid's current state ahead of a discrete edit and clears
    /// any redoable future.
    pub fn push_state(&mut self, grid: &PixelGrid) {
        if let Some(limit) = self.depth_limit {
            while self.undo_stack.len() >= limit {
                self.undo_stack.pop_front();
            }
        }
        self.undo_stack.push_back(grid.snapshot());
        self.redo_stack.clear();
    }

    /// Swaps the grid back to the most recent undo snapshot, parking the
    /// current state on the redo stack. Silent no-op when there is nothing
    /// to undo.
    pub fn undo(&mut self, grid: &mut PixelGrid) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            tracing::debug!("undo stack empty");
            return false;
        };
        self.redo_stack.push(grid.snapshot());
        grid.restore(&snapshot);
        true
    }

    /// Symmetric inverse of [`SnapshotHistory::undo`].
    pub fn redo(&mut self, grid: &mut PixelGrid) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            tracing::debug!("redo stack empty");
            return false;
        };
        self.undo_stack.push_back(grid.snapshot());
        grid.restore(&snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
