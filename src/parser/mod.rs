//! Text-command parsing.
//!
//! Turns lines like:
//! - "todo read book"
//! - "deadline return book /by 10-10-2024 18:00"
//! - "event trip /from 01-01-2024 /to 05-01-2024"
//!
//! into [`Command`] values, and command arguments into their fields.

mod args;
mod command;

pub use args::{parse_deadline, parse_description, parse_event, parse_index};
pub use command::{parse_command, Command, COMMAND_WORDS};
pub use crate::core::{parse_date, parse_date_time, parse_moment};
