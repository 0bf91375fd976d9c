//! taskpad - a personal task-tracking assistant
//!
//! This crate parses free-text commands (`todo`, `deadline`, `event`, `mark`,
//! `find`, ...) into structured commands, applies them to a task list, and
//! persists the list to a pipe-delimited save file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod executor;
pub mod notify;
pub mod output;
pub mod parser;
pub mod repl;
pub mod session;
pub mod storage;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{EntryError, InputError, TaskpadError};
pub use parser::{parse_command, Command};
pub use task::{Task, TaskKind, TaskList};
