//! Save-file line format.
//!
//! One task per line, fields separated by `|` with surrounding whitespace
//! ignored:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2024-10-10T18:00
//! E | 0 | trip | 2024-01-01T00:00 | 2024-01-05T00:00
//! ```
//!
//! The second field is the done flag (`0` or `1`). Timestamps are ISO-8601
//! local date-times; seconds are written only when they are non-zero.

use chrono::{NaiveDateTime, Timelike};

use crate::error::EntryError;
use crate::parser::parse_description;
use crate::task::{Task, TaskKind};

const SEPARATOR: &str = " | ";

/// Render a task as one save-file line (without the newline).
#[must_use]
pub fn encode(task: &Task) -> String {
    let mut fields = vec![
        task.kind().tag().to_string(),
        if task.done { "1" } else { "0" }.to_string(),
        task.description().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { due } => fields.push(encode_timestamp(due)),
        TaskKind::Event { start, end } => {
            fields.push(encode_timestamp(start));
            fields.push(encode_timestamp(end));
        },
    }
    fields.join(SEPARATOR)
}

/// Parse one save-file line, or `None` if it is not a valid entry.
#[must_use]
pub fn decode(line: &str) -> Option<Task> {
    try_decode(line).ok()
}

/// Parse one save-file line, saying why it was rejected.
///
/// # Errors
///
/// Returns an `EntryError` for a wrong field count, a done flag other than
/// `0`/`1`, an unknown type letter, an unparsable timestamp, or a
/// description that could not have been entered as a command.
pub fn try_decode(line: &str) -> Result<Task, EntryError> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(EntryError::FieldCount {
            expected: 3,
            found: fields.len(),
        });
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => return Err(EntryError::DoneFlag(other.to_string())),
    };

    let kind = match fields[0] {
        "T" => {
            expect_fields(&fields, 3)?;
            TaskKind::Todo
        },
        "D" => {
            expect_fields(&fields, 4)?;
            TaskKind::Deadline {
                due: decode_timestamp(fields[3])?,
            }
        },
        "E" => {
            expect_fields(&fields, 5)?;
            TaskKind::Event {
                start: decode_timestamp(fields[3])?,
                end: decode_timestamp(fields[4])?,
            }
        },
        other => return Err(EntryError::UnknownType(other.to_string())),
    };

    let description =
        parse_description(kind.keyword(), fields[2]).map_err(EntryError::Description)?;

    Ok(Task::new(description, kind).with_done(done))
}

fn expect_fields(fields: &[&str], expected: usize) -> Result<(), EntryError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(EntryError::FieldCount {
            expected,
            found: fields.len(),
        })
    }
}

fn encode_timestamp(moment: &NaiveDateTime) -> String {
    if moment.second() == 0 && moment.nanosecond() == 0 {
        moment.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        moment.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

fn decode_timestamp(text: &str) -> Result<NaiveDateTime, EntryError> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|_| EntryError::Timestamp(text.to_string()))
}
