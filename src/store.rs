use crate::stroke::Stroke;

/// Committed strokes in drawing order, plus the strokes that were undone.
///
/// A stroke lives in exactly one of the two stacks. Every method reports
/// whether the committed sequence changed so the caller can redraw and notify.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strokes(strokes: Vec<Stroke>) -> Self {
        Self {
            strokes,
            undone: Vec::new(),
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Strokes that `redo` would bring back, oldest undo last
    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    /// Replace the committed sequence wholesale. The redo buffer is kept.
    pub fn replace_strokes(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }

    /// Append a freshly drawn stroke. Invalidates redo history.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.undone.clear();
    }

    pub fn undoable(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn redoable(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Move the last stroke onto the redo buffer
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone stroke back
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Remove all committed strokes. Undone strokes stay redoable.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn clear_redo(&mut self) {
        self.undone.clear();
    }

    /// JSON array of the committed strokes, in order
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.strokes).unwrap_or_else(|e| {
            log::error!("failed to serialize strokes: {e}");
            String::from("[]")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeStyle;

    fn stroke(n: u32) -> Stroke {
        Stroke::new(format!("M0,0L{n},{n}"), StrokeStyle::default())
    }

    #[test]
    fn undo_moves_strokes_to_redo_buffer() {
        let mut store = StrokeStore::new();
        for n in 1..=3 {
            store.commit(stroke(n));
        }

        assert!(store.undo());
        assert!(store.undo());
        assert_eq!(store.strokes(), &[stroke(1)]);
        assert_eq!(store.undone(), &[stroke(3), stroke(2)]);

        assert!(store.redo());
        assert_eq!(store.strokes(), &[stroke(1), stroke(2)]);
        assert_eq!(store.undone(), &[stroke(3)]);
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut store = StrokeStore::new();
        assert!(!store.undo());
        assert!(!store.redo());
        assert!(!store.undoable());
        assert!(!store.redoable());
    }

    #[test]
    fn commit_clears_redo() {
        let mut store = StrokeStore::new();
        store.commit(stroke(1));
        store.undo();
        assert!(store.redoable());

        store.commit(stroke(2));
        assert!(!store.redoable());
        assert!(!store.redo());
    }

    #[test]
    fn clear_keeps_redo_buffer() {
        let mut store = StrokeStore::new();
        store.commit(stroke(1));
        store.commit(stroke(2));
        store.undo();
        store.clear();

        assert_eq!(store.serialize(), "[]");
        assert!(store.redoable());
    }
}
