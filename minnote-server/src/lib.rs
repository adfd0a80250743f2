//! HTTP server for Minnote.
//!
//! This crate is the transport layer over [`minnote_core::NoteStore`]: it
//! parses requests, calls the store, and maps store results to status codes
//! and bodies. It holds no note logic of its own. The router is exposed so
//! integration tests can drive it without binding a socket.

pub mod api;
pub mod error;

pub use api::{router, AppState};
pub use error::ApiError;
