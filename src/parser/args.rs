//! Sub-parsers for command arguments.
//!
//! Multi-field commands use literal markers inside a single line:
//! `deadline <description> /by <when>` and
//! `event <description> /from <when> /to <when>`. The first occurrence of each
//! marker wins, so a description cannot itself contain marker text.

use crate::error::InputError;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

const DEADLINE_USAGE: &str = "deadline <description> /by <dd-MM-yyyy [HH:mm]>";
const EVENT_USAGE: &str = "event <description> /from <dd-MM-yyyy [HH:mm]> /to <dd-MM-yyyy [HH:mm]>";

/// Split deadline arguments into `(description, due_text)`, both trimmed.
///
/// # Errors
///
/// Returns `InputError::MalformedArguments` if `/by` is missing.
pub fn parse_deadline(args: &str) -> Result<(&str, &str), InputError> {
    let by = args.find(BY).ok_or(InputError::MalformedArguments {
        command: "deadline",
        usage: DEADLINE_USAGE,
    })?;
    Ok((args[..by].trim(), args[by + BY.len()..].trim()))
}

/// Split event arguments into `(description, start_text, end_text)`, all
/// trimmed.
///
/// # Errors
///
/// Returns `InputError::MalformedArguments` if either marker is missing or
/// `/to` does not come after `/from`.
pub fn parse_event(args: &str) -> Result<(&str, &str, &str), InputError> {
    let malformed = || InputError::MalformedArguments {
        command: "event",
        usage: EVENT_USAGE,
    };
    let from = args.find(FROM).ok_or_else(malformed)?;
    let to = args.find(TO).ok_or_else(malformed)?;
    let start_at = from + FROM.len();
    if to < start_at {
        return Err(malformed());
    }
    Ok((
        args[..from].trim(),
        args[start_at..to].trim(),
        args[to + TO.len()..].trim(),
    ))
}

/// Convert a 1-based task number typed by the user into a 0-based index.
///
/// # Errors
///
/// Returns `InputError::NonIntegerIndex` if the text is not an integer, and
/// `InputError::IndexOutOfRange` if it is below 1.
pub fn parse_index(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    let number: i64 = text
        .parse()
        .map_err(|_| InputError::NonIntegerIndex(text.to_string()))?;
    number
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .ok_or(InputError::IndexOutOfRange(number))
}

/// Validate a task description for `command`.
///
/// # Errors
///
/// Returns `InputError::EmptyDescription` for blank text and
/// `InputError::ReservedCharacter` if it contains the save-file delimiter or
/// a control character.
pub fn parse_description<'a>(command: &'static str, text: &'a str) -> Result<&'a str, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::EmptyDescription { command });
    }
    if let Some(reserved) = text.chars().find(|&c| c == '|' || c.is_control()) {
        return Err(InputError::ReservedCharacter(reserved));
    }
    Ok(text)
}
