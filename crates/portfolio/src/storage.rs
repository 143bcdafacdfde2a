//! Contact message log.
//!
//! Messages live in a single JSON file holding an array of records. Every
//! append reads the whole array, pushes the new record and replaces the file,
//! so the file is always a complete, valid array.
//!
//! Appends through one [`MessageLog`] are serialized by an internal mutex,
//! and the new content goes to a sibling temporary file that is renamed over
//! the store. A failed write leaves the previous store in place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::message::{ContactMessage, ContactSubmission};

/// Indentation of the store file.
const STORE_INDENT: &[u8] = b"    ";

/// Append-only log of contact messages backed by a JSON file.
#[derive(Debug)]
pub struct MessageLog {
    /// Path to the store file.
    path: PathBuf,
    /// Held for the whole read-modify-write of an append.
    write_lock: Mutex<()>,
}

impl MessageLog {
    /// Create a log backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first append; a missing file is
    /// an empty log.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("Message log at {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptStore`] if the file exists but is not a JSON
    /// array of messages, or [`Error::StoreRead`] if it cannot be read.
    pub fn load_all(&self) -> Result<Vec<ContactMessage>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No message store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::StoreRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let messages: Vec<ContactMessage> =
            serde_json::from_str(&content).map_err(|source| Error::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} messages from {}",
            messages.len(),
            self.path.display()
        );
        Ok(messages)
    }

    /// Count the stored messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    /// Load the newest `n` messages, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded.
    pub fn load_last(&self, n: usize) -> Result<Vec<ContactMessage>> {
        let mut messages = self.load_all()?;
        let skip = messages.len().saturating_sub(n);
        messages.drain(..skip);
        Ok(messages)
    }

    /// Stamp a submission with the current local time and append it.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing store cannot be loaded, or if the
    /// updated store cannot be serialized or written.
    pub fn append(&self, submission: ContactSubmission) -> Result<ContactMessage> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut messages = self.load_all()?;
        let record = submission.stamp_now();
        messages.push(record.clone());
        self.write_all(&messages)?;

        info!(
            "Stored contact message from {} ({} total)",
            record.sender(),
            messages.len()
        );
        Ok(record)
    }

    /// Replace the store with `messages`.
    fn write_all(&self, messages: &[ContactMessage]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(STORE_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        messages.serialize(&mut ser)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let tmp_path = self.tmp_path();
        let written = fs::File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(&buf)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp_path, &self.path));

        if let Err(source) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::StoreWrite {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }

    /// Sibling file the new store content is written to before the rename.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
