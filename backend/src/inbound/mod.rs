//! Inbound adapters translating external requests into domain calls.
//!
//! [`http`] serves the JSON API; [`pages`] serves HTML views and form posts.
//! Both depend on the same port traits and session helpers.

pub mod http;
pub mod pages;
