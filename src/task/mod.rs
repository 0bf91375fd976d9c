//! The task model.
//!
//! A [`Task`] is a description, a done flag and a [`TaskKind`]. The kind is a
//! closed enum, so every variant's time fields are always present and never
//! mixed up with another variant's.

mod list;

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::format_moment;

pub use list::TaskList;

/// What kind of task this is, with the time fields that kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskKind {
    /// A plain to-do.
    Todo,
    /// A task due at a point in time.
    Deadline { due: NaiveDateTime },
    /// A task spanning a time range.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag used in listings and in the save file.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// The command word that creates this kind of task.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// A tracked task.
///
/// Tasks are only built inside the crate, from a description that has passed
/// [`parse_description`](crate::parser::parse_description): trimmed,
/// non-empty and free of `|` and control characters. Every task therefore
/// fits on one save-file line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    description: String,
    pub done: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    /// Create an open task from an already validated description.
    #[must_use]
    pub(crate) fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    #[must_use]
    pub(crate) fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    #[must_use]
    pub(crate) fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { due })
    }

    #[must_use]
    pub(crate) fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self::new(description, TaskKind::Event { start, end })
    }

    /// Builder-style setter for the done flag.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Status box shown in listings.
    #[must_use]
    pub const fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Time details shown after the description, if any.
    #[must_use]
    pub fn schedule(&self) -> Option<String> {
        match &self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { due } => Some(format!("(by: {})", format_moment(due))),
            TaskKind::Event { start, end } => Some(format!(
                "(from: {} to: {})",
                format_moment(start),
                format_moment(end)
            )),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{} {}", self.kind.tag(), self.status_icon(), self.description)?;
        if let Some(schedule) = self.schedule() {
            write!(f, " {schedule}")?;
        }
        Ok(())
    }
}
