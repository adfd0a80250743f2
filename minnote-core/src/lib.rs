//! Core library for Minnote — a minimal note service persisting named text
//! notes in a single JSON file.
//!
//! The primary entry point is [`NoteStore`], which owns the in-memory
//! collection and the file backing it. All note mutations go through
//! `NoteStore` methods; each accepted mutation rewrites the file before it
//! returns.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{MinnoteError, Result},
    note::Note,
    store::NoteStore,
};
