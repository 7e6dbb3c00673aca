//! Per-type identifier sequence.

use crate::domain::foundation::SequentialId;

/// Hands out 1, 2, 3, ... and never repeats a value.
///
/// Not synchronized on its own; the owning repository holds it behind the
/// same lock as the store it feeds.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next identifier and advances the sequence.
    pub fn next_id<I: SequentialId>(&mut self) -> I {
        let id = I::from_sequence(self.next);
        self.next += 1;
        id
    }

    /// Value the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
