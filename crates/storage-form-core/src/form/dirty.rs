//! Dirty state tracking.

/// Tracks whether the form was edited since it was last clean.
///
/// The form starts clean, becomes dirty on the first edit, and is clean again
/// after a successful submit.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    /// Whether there are edits since the last submit.
    dirty: bool,

    /// Number of edits applied since the form was last clean.
    edits: usize,
}

impl DirtyTracker {
    /// Create a new tracker with no edits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are edits since the form was last clean.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of edits since the form was last clean.
    #[inline]
    pub fn edits(&self) -> usize {
        self.edits
    }

    /// Record an edit.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.edits += 1;
    }

    /// Mark the form clean again.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
        self.edits = 0;
    }
}
