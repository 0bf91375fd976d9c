//! The message sink for malformed input.
//!
//! The executor does not print anything itself. When a command's arguments
//! are malformed it hands the [`InputError`] to a [`Notifier`], which decides
//! how (and whether) to show it.

use crate::error::InputError;

/// Receives one notice per rejected command.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn report(&mut self, notice: &InputError);
}

impl InputError {
    /// Stable name of the notice, used in JSON output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedArguments { .. } => "malformed_arguments",
            Self::EmptyDescription { .. } => "empty_description",
            Self::ReservedCharacter(_) => "reserved_character",
            Self::MissingKeyword => "missing_keyword",
            Self::NonIntegerIndex(_) => "non_integer_index",
            Self::IndexOutOfRange(_) => "index_out_of_range",
            Self::InvalidDateFormat(_) => "invalid_date_format",
            Self::InvalidDateTimeFormat(_) => "invalid_date_time_format",
        }
    }
}
