//! In-memory adapters. State lives for the life of the process only.

mod in_memory_note_store;

pub use in_memory_note_store::InMemoryNoteStore;
