//! Journal — append-only fact store backed by a flat file.
//!
//! One encoded event per line, UTF-8, newline-terminated, never rewritten
//! or truncated. Write order is the total order of the system.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use factline_common::JournalError;

use crate::codec;
use crate::types::Event;

/// Append-only event journal. The single source of truth.
///
/// `append` takes `&mut self`, so the owner is the serialization point:
/// callers that need a total order across events must route every append
/// through one exclusively-held `Journal`.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    file: File,
}

impl Journal {
    /// Open (or create) the journal at `path`. Parent directories are
    /// created as needed; the file handle stays in append mode for the
    /// lifetime of the value.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self { path, file })
    }

    /// Durably append one event as a new journal line.
    ///
    /// The whole newline-terminated record goes out in a single write, so a
    /// record is never interleaved with another. On failure the journal may
    /// gain a partial trailing line but the caller must treat the command
    /// as rejected and apply nothing in memory.
    pub fn append(&mut self, event: &Event) -> Result<(), JournalError> {
        let mut line = codec::encode(event)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;

        debug!(event_id = %event.id, entity = %event.entity, "appended event");
        Ok(())
    }

    /// Read raw journal lines in original write order. Single pass, used
    /// only by startup replay. Blank lines are skipped.
    pub fn read_all(&self) -> Result<impl Iterator<Item = std::io::Result<String>>, JournalError> {
        let file = File::open(&self.path)?;
        let lines = BufReader::new(file)
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.is_empty()));
        Ok(lines)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
