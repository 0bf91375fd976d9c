//! Path resolution for taskpad configuration and data files.
//!
//! All taskpad data is stored in `~/.taskpad/` unless another root is given:
//! - `config.yaml` - Main configuration file
//! - `tasks.txt` - The save file, one task per line
//! - `history.txt` - Line-editor history for the interactive session

use std::path::PathBuf;

use crate::error::TaskpadError;

/// Paths to taskpad configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskpad/`
    pub root: PathBuf,
    /// Config file: `~/.taskpad/config.yaml`
    pub config_file: PathBuf,
    /// Default save file: `~/.taskpad/tasks.txt`
    pub save_file: PathBuf,
    /// REPL history: `~/.taskpad/history.txt`
    pub history: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskpadError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskpadError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskpad")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            save_file: root.join("tasks.txt"),
            history: root.join("history.txt"),
            root,
        }
    }

    /// Resolve paths from an explicit root if one was given, else from the
    /// home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no root was given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, TaskpadError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskpadError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskpadError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
