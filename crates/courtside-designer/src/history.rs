//! Snapshot-based undo/redo.
//!
//! Every committed mutation stores a full copy of the layer list; undo and
//! redo move a cursor through the list. Pushing after an undo discards the
//! redo branch. With no capacity set the stack only grows with memory.

/// Undo/redo history of full snapshots
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
    capacity: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Creates an unbounded history whose base state is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            capacity: None,
        }
    }

    /// Creates a history that keeps at most `capacity` undo steps.
    pub fn with_capacity(initial: T, capacity: Option<usize>) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            capacity: capacity.map(|c| c.max(1)),
        }
    }

    /// Records a committed state.
    pub fn push(&mut self, snapshot: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        if let Some(capacity) = self.capacity {
            while self.snapshots.len() > capacity + 1 {
                self.snapshots.remove(0);
                self.cursor -= 1;
            }
        }
    }

    /// Steps back; returns the state to restore.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor)
    }

    /// Steps forward; returns the state to restore.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor)
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - 1 - self.cursor
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Forgets everything and starts over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = 0;
    }
}
