//! Error types for the Minnote core library.

use thiserror::Error;

/// All errors that can occur within the Minnote core library.
#[derive(Debug, Error)]
pub enum MinnoteError {
    /// A note name was requested that does not exist in the collection.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// A note was created with a name the collection already contains.
    #[error("Note already exists: {0}")]
    DuplicateNote(String),

    /// An I/O operation on the persistence file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored note data could not be deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


/// Convenience alias that pins the error type to [`MinnoteError`].
pub type Result<T> = std::result::Result<T, MinnoteError>;
