//! On-disk persistence for the note collection.
//!
//! The whole collection is stored as one JSON array of `{"name", "text"}`
//! objects and rewritten in full on every change.

use crate::{Note, Result};
use std::path::Path;
use tokio::fs;

/// Serializes the collection to the persisted JSON layout, in order.
pub fn encode(notes: &[Note]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(notes)?)
}

/// Parses a persisted JSON array back into a collection, preserving order.
pub fn decode(bytes: &[u8]) -> Result<Vec<Note>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads and decodes the persistence file at `path`.
pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Note>> {
    let bytes = fs::read(path).await?;
    decode(&bytes)
}

/// Encodes `notes` and replaces the persistence file at `path`.
///
/// The bytes go to a sibling `.tmp` file first, which is then renamed into
/// place; the file at `path` is never left truncated.
pub async fn write_file<P: AsRef<Path>>(path: P, notes: &[Note]) -> Result<()> {
    let path = path.as_ref();
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, encode(notes)?).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
