//! Concurrency-safe note collection backed by a single JSON file.

use crate::core::storage;
use crate::{MinnoteError, Note, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::warn;

/// The authoritative owner of the note collection.
///
/// `NoteStore` is the primary interface for all note operations. The
/// collection lives in memory behind an async read/write lock; every
/// accepted mutation rewrites the persistence file in full before the
/// call returns, while the write lock is still held. Two mutations can
/// therefore never interleave, and readers never observe a half-applied
/// change.
///
/// The server shares one instance across handlers behind an `Arc`.
pub struct NoteStore {
    path: PathBuf,
    notes: RwLock<Vec<Note>>,
}

impl NoteStore {
    /// Opens the store backed by the persistence file at `path`.
    ///
    /// A missing or unparsable file yields an empty collection, and the
    /// file is rewritten immediately so disk and memory agree from the
    /// start. Any other read failure is reported instead of masked.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MinnoteError::Io`] if the file exists but cannot
    /// be read, or if writing a fresh file fails.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let notes = match storage::read_file(&path).await {
            Ok(notes) => notes,
            Err(MinnoteError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                storage::write_file(&path, &[]).await?;
                Vec::new()
            }
            Err(MinnoteError::Json(e)) => {
                warn!("resetting unparsable note file {}: {e}", path.display());
                storage::write_file(&path, &[]).await?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            notes: RwLock::new(notes),
        })
    }

    /// Returns the location of the persistence file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of notes currently held.
    pub async fn note_count(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Returns the text of the first note named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MinnoteError::NoteNotFound`] if no note has this name.
    pub async fn get(&self, name: &str) -> Result<String> {
        self.notes
            .read()
            .await
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.text.clone())
            .ok_or_else(|| MinnoteError::NoteNotFound(name.to_string()))
    }

    /// Returns a snapshot of the whole collection in insertion order.
    pub async fn list(&self) -> Vec<Note> {
        self.notes.read().await.clone()
    }

    /// Appends a new note and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MinnoteError::DuplicateNote`] if a note named `name`
    /// already exists (nothing is written in that case), or
    /// [`crate::MinnoteError::Io`] if the persistence write fails.
    pub async fn create(&self, name: &str, text: &str) -> Result<()> {
        let mut notes = self.notes.write().await;
        if notes.iter().any(|n| n.name == name) {
            return Err(MinnoteError::DuplicateNote(name.to_string()));
        }

        notes.push(Note {
            name: name.to_string(),
            text: text.to_string(),
        });
        storage::write_file(&self.path, &notes).await
    }

    /// Replaces the text of every note named `name`, keeping each note's
    /// position, and persists the collection.
    ///
    /// Duplicate names can only come from a hand-edited file; [`create`]
    /// never produces them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MinnoteError::NoteNotFound`] if no note matched
    /// (nothing is written in that case), or [`crate::MinnoteError::Io`]
    /// if the persistence write fails.
    ///
    /// [`create`]: NoteStore::create
    pub async fn update(&self, name: &str, text: &str) -> Result<()> {
        let mut notes = self.notes.write().await;
        let mut matched = false;
        for note in notes.iter_mut().filter(|n| n.name == name) {
            note.text = text.to_string();
            matched = true;
        }
        if !matched {
            return Err(MinnoteError::NoteNotFound(name.to_string()));
        }

        storage::write_file(&self.path, &notes).await
    }

    /// Removes every note named `name` and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MinnoteError::NoteNotFound`] if no note matched
    /// (nothing is written in that case), or [`crate::MinnoteError::Io`]
    /// if the persistence write fails.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let mut notes = self.notes.write().await;
        let len_before = notes.len();
        notes.retain(|n| n.name != name);
        if notes.len() == len_before {
            return Err(MinnoteError::NoteNotFound(name.to_string()));
        }

        storage::write_file(&self.path, &notes).await
    }
}
