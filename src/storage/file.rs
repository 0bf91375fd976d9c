//! The save file on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::codec::{encode, try_decode};
use crate::error::{EntryError, TaskpadError};
use crate::task::{Task, TaskList};

/// Reads and rewrites the task save file.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid task from the file.
    ///
    /// A missing file is an empty list. Blank lines are ignored and invalid
    /// lines, including lines that are not UTF-8, are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Storage` if the file exists but cannot be read.
    pub fn load(&self) -> Result<TaskList, TaskpadError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no save file yet");
            return Ok(TaskList::new());
        }

        let contents = fs::read(&self.path).map_err(|source| self.storage_error(source))?;

        let mut skipped = 0_usize;
        let tasks: TaskList = contents
            .split(|&byte| byte == b'\n')
            .enumerate()
            .map(|(number, line)| (number, line.strip_suffix(b"\r").unwrap_or(line)))
            .filter(|(_, line)| !line.trim_ascii().is_empty())
            .filter_map(|(number, line)| match decode_line(line) {
                Ok(task) => Some(task),
                Err(reason) => {
                    skipped += 1;
                    warn!(line = number + 1, %reason, "skipping unrecognized save file entry");
                    None
                },
            })
            .collect();

        debug!(
            path = %self.path.display(),
            loaded = tasks.len(),
            skipped,
            "loaded save file"
        );
        Ok(tasks)
    }

    /// Rewrite the whole file from `tasks`.
    ///
    /// The new contents are written to a temporary file in the same directory
    /// and renamed over the old file. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Storage` if any step of the write fails.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TaskpadError> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode(task));
            contents.push('\n');
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.storage_error(source))?;

        let mut temp =
            tempfile::NamedTempFile::new_in(dir).map_err(|source| self.storage_error(source))?;
        temp.write_all(contents.as_bytes())
            .map_err(|source| self.storage_error(source))?;
        temp.flush().map_err(|source| self.storage_error(source))?;
        temp.persist(&self.path)
            .map_err(|e| self.storage_error(e.error))?;

        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn storage_error(&self, source: std::io::Error) -> TaskpadError {
        TaskpadError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

fn decode_line(line: &[u8]) -> Result<Task, EntryError> {
    let line = std::str::from_utf8(line).map_err(|_| EntryError::Encoding)?;
    try_decode(line)
}
