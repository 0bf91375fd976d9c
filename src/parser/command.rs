//! Keyword dispatch for one line of user input.

/// Every keyword the assistant understands.
pub const COMMAND_WORDS: [&str; 10] = [
    "todo", "deadline", "event", "delete", "mark", "unmark", "list", "find", "date", "bye",
];

/// One user instruction, ready for the executor.
///
/// Argument-bearing variants hold the trimmed text after the keyword. The
/// executor runs the matching sub-parser on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo(String),
    AddDeadline(String),
    AddEvent(String),
    Delete(String),
    Mark(String),
    Unmark(String),
    List,
    FindByDate(String),
    FindByKeyword(String),
    Goodbye,
    /// Unrecognized keyword, or an empty line.
    Incorrect,
}

/// Parse one line of input into a [`Command`].
///
/// The keyword is the first whitespace-delimited token and must match one of
/// [`COMMAND_WORDS`] exactly. Anything else is [`Command::Incorrect`]; this
/// function never fails.
///
/// # Examples
///
/// ```
/// use taskpad::parser::{parse_command, Command};
///
/// assert_eq!(parse_command("todo  read book "), Command::AddTodo("read book".into()));
/// assert_eq!(parse_command("list"), Command::List);
/// assert_eq!(parse_command("xyz foo"), Command::Incorrect);
/// ```
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let (keyword, args) = input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(keyword, rest)| (keyword, rest.trim()));
    let args = args.to_string();

    match keyword {
        "todo" => Command::AddTodo(args),
        "deadline" => Command::AddDeadline(args),
        "event" => Command::AddEvent(args),
        "delete" => Command::Delete(args),
        "mark" => Command::Mark(args),
        "unmark" => Command::Unmark(args),
        "list" => Command::List,
        "find" => Command::FindByKeyword(args),
        "date" => Command::FindByDate(args),
        "bye" => Command::Goodbye,
        _ => Command::Incorrect,
    }
}
