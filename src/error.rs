//! Error types for taskpad.
//!
//! `TaskpadError` is the failure type of every fallible public function. The
//! two domain enums, [`InputError`] and [`EntryError`], describe malformed
//! user input and malformed save-file lines. They are never fatal: the
//! executor turns the first into a notice, the storage layer turns the second
//! into a skipped line.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{DATE_PATTERN, DATE_TIME_PATTERN};

/// Top-level error for taskpad operations.
#[derive(Debug, Error)]
pub enum TaskpadError {
    /// Configuration could not be resolved, read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plain I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The save file could not be read or written.
    #[error("Failed to access save file {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line editor failed.
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// A malformed live command.
///
/// Each variant is one notice the message sink can receive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required marker (`/by`, `/from`, `/to`) is missing or misplaced.
    #[error("The format of {command} is wrong. Try: {usage}")]
    MalformedArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The task description is blank.
    #[error("The description of a {command} cannot be empty.")]
    EmptyDescription { command: &'static str },

    /// The description contains the save-file field delimiter or a control
    /// character such as a line break.
    #[error("A task description cannot contain {0:?}.")]
    ReservedCharacter(char),

    /// `find` was given nothing to look for.
    #[error("Tell me what to find, e.g. find book")]
    MissingKeyword,

    /// The task number is not an integer.
    #[error("The task number must be an integer, got '{0}'.")]
    NonIntegerIndex(String),

    /// The task number does not name a task in the list.
    #[error("There is no task numbered {0}.")]
    IndexOutOfRange(i64),

    /// A date does not match `dd-MM-yyyy`.
    #[error("'{0}' is not a date. Use {pat}, e.g. 10-10-2024.", pat = DATE_PATTERN)]
    InvalidDateFormat(String),

    /// A date-time does not match `dd-MM-yyyy HH:mm`.
    #[error("'{0}' is not a date-time. Use {pat}, e.g. 10-10-2024 18:00.", pat = DATE_TIME_PATTERN)]
    InvalidDateTimeFormat(String),
}

/// Why a save-file line was not turned into a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("done flag must be 0 or 1, found '{0}'")]
    DoneFlag(String),

    #[error("unknown task type '{0}'")]
    UnknownType(String),

    #[error("invalid timestamp '{0}'")]
    Timestamp(String),

    #[error("invalid description: {0}")]
    Description(InputError),

    #[error("line is not valid UTF-8")]
    Encoding,
}
