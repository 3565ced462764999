//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`NotesQuery`], [`NotesCommand`], [`LoginService`],
//! [`ProfileService`]) are called by inbound adapters. The driven port
//! [`NoteStore`] is implemented by outbound adapters and consumed by the
//! notes service.

mod login_service;
mod note_store;
mod notes_command;
mod notes_query;
mod profile_service;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use note_store::MockNoteStore;
pub use note_store::NoteStore;
#[cfg(test)]
pub use notes_command::MockNotesCommand;
pub use notes_command::NotesCommand;
#[cfg(test)]
pub use notes_query::MockNotesQuery;
pub use notes_query::NotesQuery;
#[cfg(test)]
pub use profile_service::MockProfileService;
pub use profile_service::{FixtureAccountDirectory, ProfileService};
