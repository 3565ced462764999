//! Identity allocation for new notes.

use std::sync::atomic::{AtomicU64, Ordering};

use super::NoteId;

/// Issues unique, strictly increasing note identifiers starting at 1.
///
/// Allocation is a single atomic increment, so concurrent callers never
/// observe the same value.
///
/// # Examples
/// ```
/// use notes_backend::domain::NoteIdAllocator;
///
/// let ids = NoteIdAllocator::new();
/// assert_eq!(ids.next_id().get(), 1);
/// assert_eq!(ids.next_id().get(), 2);
/// ```
#[derive(Debug)]
pub struct NoteIdAllocator {
    next: AtomicU64,
}

impl Default for NoteIdAllocator {
    fn default() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl NoteIdAllocator {
    /// Create an allocator whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier.
    pub fn next_id(&self) -> NoteId {
        NoteId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
