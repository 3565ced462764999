//! Builders for the shared HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use notes_backend::domain::NotesService;
use notes_backend::domain::ports::{FixtureAccountDirectory, FixtureLoginService};
use notes_backend::inbound::http::state::HttpState;
use notes_backend::outbound::memory::InMemoryNoteStore;

/// Wire one in-memory notes service behind both driving ports.
///
/// The same instance serves the API and the page adapter, so both observe a
/// single store and a single identity sequence for the process lifetime.
/// Profile edits likewise live in one account directory.
pub(crate) fn build_http_state() -> web::Data<HttpState> {
    let notes = Arc::new(NotesService::new(
        InMemoryNoteStore::new(),
        Arc::new(DefaultClock),
    ));
    web::Data::new(HttpState::new(
        Arc::new(FixtureLoginService),
        notes.clone(),
        notes,
    )
    .with_profiles(Arc::new(FixtureAccountDirectory::new())))
}
