//! Domain primitives, ports and services.
//!
//! Purpose: define the note entity, the owner identity, the
//! transport-agnostic error payload and the notes service. Adapters depend on
//! this module; it depends on no adapter.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - Note, NoteId, NoteDraft, NoteFilter, NoteError: the note model.
//! - NotesService: validation- and ownership-aware note operations.
//! - UserId, LoginCredentials: owner identity and login input.
//! - Account, EmailUpdate: profile data for the signed-in user.

pub mod account;
pub mod auth;
pub mod error;
pub mod note;
pub mod note_id_allocator;
pub mod notes_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account::{Account, EMAIL_REQUIRED_MESSAGE, EmailUpdate};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::note::{
    DEFAULT_CATEGORY, INVALID_INPUT_MESSAGE, NOT_FOUND_MESSAGE, Note, NoteDraft, NoteError,
    NoteFilter, NoteId, NoteIdParseError,
};
pub use self::note_id_allocator::NoteIdAllocator;
pub use self::notes_service::NotesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use notes_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
