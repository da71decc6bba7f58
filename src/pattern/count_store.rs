//! The logical stack shared by `a^n` and its mirror.
//!
//! Every entry is the same kind of marker, and the mirror only compares
//! counts, so a depth counter stands in for a real stack.

/// Per-run count of symbols pushed by `ExactCount` instructions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountStore {
    depth: usize,
}

impl CountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.depth += 1;
    }

    /// Remove one entry. Returns `false` if the store was already empty.
    pub fn pop(&mut self) -> bool {
        match self.depth.checked_sub(1) {
            Some(d) => {
                self.depth = d;
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
