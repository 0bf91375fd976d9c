//! JSON output formatting for taskpad.
//!
//! Every reply becomes one JSON object with an `event` field naming what
//! happened, so scripts can drive the assistant line by line.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{InputError, TaskpadError};
use crate::executor::{Reply, Selection};
use crate::task::Task;

/// Format a reply as JSON
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_reply_json(reply: &Reply) -> Result<String, TaskpadError> {
    let output = match reply {
        Reply::Added { task, count } => json!({
            "event": "added",
            "task": task,
            "count": count,
        }),
        Reply::Deleted { task, count } => json!({
            "event": "deleted",
            "task": task,
            "count": count,
        }),
        Reply::Marked(task) => json!({ "event": "marked", "task": task }),
        Reply::Unmarked(task) => json!({ "event": "unmarked", "task": task }),
        Reply::Listing { selection, tasks } => listing_json(selection, tasks),
        Reply::Goodbye => json!({ "event": "goodbye" }),
        Reply::Unknown => json!({ "event": "unknown_command" }),
        Reply::Rejected => return Ok(String::new()),
    };
    to_json(&output)
}

fn listing_json(selection: &Selection, tasks: &[(usize, Task)]) -> Value {
    let items: Vec<Value> = tasks
        .iter()
        .map(|(index, task)| json!({ "number": index + 1, "task": task }))
        .collect();
    let (kind, filter) = match selection {
        Selection::All => ("all", Value::Null),
        Selection::Keyword(keyword) => ("keyword", json!(keyword)),
        Selection::Date(day) => ("date", json!(day)),
    };
    json!({
        "event": "listing",
        "selection": kind,
        "filter": filter,
        "count": items.len(),
        "items": items,
    })
}

/// Format a notice as JSON
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_notice_json(notice: &InputError) -> Result<String, TaskpadError> {
    to_json(&json!({
        "event": "error",
        "code": notice.code(),
        "message": notice.to_string(),
    }))
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskpadError> {
    Ok(serde_json::to_string(value)?)
}
