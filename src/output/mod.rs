//! Output formatting for taskpad.
//!
//! Replies and notices render either as colored text or as one JSON object per
//! line.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::{InputError, TaskpadError};
use crate::executor::Reply;
use crate::notify::Notifier;

pub use json::*;
pub use pretty::*;

/// Format a reply based on output format
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_reply(reply: &Reply, format: OutputFormat) -> Result<String, TaskpadError> {
    match format {
        OutputFormat::Pretty => Ok(format_reply_pretty(reply)),
        OutputFormat::Json => format_reply_json(reply),
    }
}

/// Format a notice based on output format
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_notice(notice: &InputError, format: OutputFormat) -> Result<String, TaskpadError> {
    match format {
        OutputFormat::Pretty => Ok(format_notice_pretty(notice)),
        OutputFormat::Json => format_notice_json(notice),
    }
}

/// Prints notices to stdout, alongside regular replies.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    format: OutputFormat,
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Notifier for ConsoleNotifier {
    fn report(&mut self, notice: &InputError) {
        match format_notice(notice, self.format) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "failed to format notice"),
        }
    }
}
