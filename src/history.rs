// Linear undo/redo over whole-canvas snapshots.
// Starting any new edit pushes the pre-edit canvas and drops the redo branch;
// undo/redo only ever *move* snapshots between the two stacks.

use std::mem;

use tracing::debug;

use crate::surface::Bitmap;

/// Immutable copy of the canvas at some point in time.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot(Bitmap);

/// Two LIFO stacks of snapshots, bounded only by memory.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` as the state to return to, and invalidate redo.
    /// Call once per user-level edit (stroke start, clear, load), never per sample.
    pub fn begin_mutation(&mut self, current: &Bitmap) {
        self.undo.push(Snapshot(current.clone()));
        let dropped = self.redo.len();
        self.redo.clear();
        debug!(undo = self.undo.len(), dropped_redo = dropped, "history: begin mutation");
    }

    /// Step back one edit. Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Bitmap) -> bool {
        let Some(prev) = self.undo.pop() else {
            debug!("history: undo with empty stack");
            return false;
        };
        let current = mem::replace(canvas, prev.0);
        self.redo.push(Snapshot(current));
        debug!(undo = self.undo.len(), redo = self.redo.len(), "history: undo");
        true
    }

    /// Step forward one undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Bitmap) -> bool {
        let Some(next) = self.redo.pop() else {
            debug!("history: redo with empty stack");
            return false;
        };
        let current = mem::replace(canvas, next.0);
        self.undo.push(Snapshot(current));
        debug!(undo = self.undo.len(), redo = self.redo.len(), "history: redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    fn canvas() -> Bitmap {
        Bitmap::new(4, 4, Rgba::WHITE)
    }

    #[test]
    fn empty_history_is_noop() {
        let mut h = History::new();
        let mut c = canvas();
        let before = c.clone();
        assert!(!h.undo(&mut c));
        assert!(!h.redo(&mut c));
        assert_eq!(c, before);
        assert!(!h.can_undo() && !h.can_redo());
    }

    #[test]
    fn undo_then_redo_moves_one_snapshot() {
        let mut h = History::new();
        let mut c = canvas();
        let blank = c.clone();

        h.begin_mutation(&c);
        c.put(1, 1, Rgba::BLACK.to_argb());
        let drawn = c.clone();

        assert!(h.undo(&mut c));
        assert_eq!(c, blank);
        assert_eq!((h.undo_len(), h.redo_len()), (0, 1));

        assert!(h.redo(&mut c));
        assert_eq!(c, drawn);
        assert_eq!((h.undo_len(), h.redo_len()), (1, 0));
    }

    #[test]
    fn new_mutation_drops_redo_branch() {
        let mut h = History::new();
        let mut c = canvas();
        h.begin_mutation(&c);
        c.put(0, 0, Rgba::BLACK.to_argb());
        h.begin_mutation(&c);
        c.put(1, 0, Rgba::BLACK.to_argb());

        h.undo(&mut c);
        h.undo(&mut c);
        assert_eq!(h.redo_len(), 2);

        h.begin_mutation(&c);
        assert!(!h.can_redo());
        assert_eq!(h.undo_len(), 1);
    }
}
