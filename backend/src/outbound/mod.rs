//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local note storage behind the `NoteStore` port.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
