//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by the API and page handlers.

pub mod trace;

pub use trace::Trace;
