//! Date and time parsing for command arguments.
//!
//! User input is parsed strictly: `dd-MM-yyyy` for dates and
//! `dd-MM-yyyy HH:mm` for date-times. Every digit position is required, so
//! `1-1-2024` is rejected even though chrono alone would accept it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::InputError;

/// Input pattern for dates, as shown to users.
pub const DATE_PATTERN: &str = "dd-MM-yyyy";

/// Input pattern for date-times, as shown to users.
pub const DATE_TIME_PATTERN: &str = "dd-MM-yyyy HH:mm";

const DATE_SHAPE: &str = "##-##-####";
const DATE_TIME_SHAPE: &str = "##-##-#### ##:##";

/// Parse a `dd-MM-yyyy` date into midnight of that day.
///
/// `None` propagates as `Ok(None)`.
///
/// # Errors
///
/// Returns `InputError::InvalidDateFormat` if the text is not a valid date in
/// that exact pattern.
pub fn parse_date(text: Option<&str>) -> Result<Option<NaiveDateTime>, InputError> {
    text.map(date_from).transpose()
}

/// Parse a `dd-MM-yyyy HH:mm` date-time.
///
/// `None` propagates as `Ok(None)`.
///
/// # Errors
///
/// Returns `InputError::InvalidDateTimeFormat` if the text is not a valid
/// date-time in that exact pattern.
pub fn parse_date_time(text: Option<&str>) -> Result<Option<NaiveDateTime>, InputError> {
    text.map(date_time_from).transpose()
}

/// Parse either a date or a date-time, picking the pattern by whether the
/// text has a time part.
///
/// # Errors
///
/// Returns the date or date-time format error for the chosen pattern.
pub fn parse_moment(text: &str) -> Result<NaiveDateTime, InputError> {
    if text.contains(' ') {
        date_time_from(text)
    } else {
        date_from(text)
    }
}

fn date_from(text: &str) -> Result<NaiveDateTime, InputError> {
    if !has_shape(text, DATE_SHAPE) {
        return Err(InputError::InvalidDateFormat(text.to_string()));
    }
    NaiveDate::parse_from_str(text, "%d-%m-%Y")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| InputError::InvalidDateFormat(text.to_string()))
}

fn date_time_from(text: &str) -> Result<NaiveDateTime, InputError> {
    if !has_shape(text, DATE_TIME_SHAPE) {
        return Err(InputError::InvalidDateTimeFormat(text.to_string()));
    }
    NaiveDateTime::parse_from_str(text, "%d-%m-%Y %H:%M")
        .map_err(|_| InputError::InvalidDateTimeFormat(text.to_string()))
}

/// `#` in the shape matches one ASCII digit, anything else matches itself.
fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'#' => c.is_ascii_digit(),
            _ => c == s,
        })
}

/// Render a moment for display: `Oct 10 2024`, plus `18:00` when the time is
/// not midnight.
#[must_use]
pub fn format_moment(moment: &NaiveDateTime) -> String {
    if moment.time() == NaiveTime::MIN {
        moment.format("%b %d %Y").to_string()
    } else if moment.second() == 0 {
        moment.format("%b %d %Y %H:%M").to_string()
    } else {
        moment.format("%b %d %Y %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_is_midnight() {
        let parsed = parse_date(Some("10-10-2024")).unwrap();
        assert_eq!(parsed, Some(ymd_hm(2024, 10, 10, 0, 0)));
    }

    #[test]
    fn test_parse_date_none_propagates() {
        assert_eq!(parse_date(None), Ok(None));
        assert_eq!(parse_date_time(None), Ok(None));
    }

    #[test]
    fn test_parse_date_rejects_other_patterns() {
        for bad in ["2024-10-10", "1-1-2024", "10/10/2024", "10-10-24", " 10-10-2024", ""] {
            assert_eq!(
                parse_date(Some(bad)),
                Err(InputError::InvalidDateFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(matches!(
            parse_date(Some("31-02-2024")),
            Err(InputError::InvalidDateFormat(_))
        ));
        assert!(parse_date(Some("29-02-2024")).unwrap().is_some());
    }

    #[test]
    fn test_parse_date_time() {
        let parsed = parse_date_time(Some("05-01-2024 18:30")).unwrap();
        assert_eq!(parsed, Some(ymd_hm(2024, 1, 5, 18, 30)));
    }

    #[test]
    fn test_parse_date_time_rejects_bad_input() {
        for bad in ["05-01-2024", "05-01-2024 6pm", "05-01-2024 24:00", "05-01-2024 18:30:00"] {
            assert!(
                matches!(
                    parse_date_time(Some(bad)),
                    Err(InputError::InvalidDateTimeFormat(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_moment_picks_pattern() {
        assert_eq!(parse_moment("01-01-2024"), Ok(ymd_hm(2024, 1, 1, 0, 0)));
        assert_eq!(parse_moment("01-01-2024 09:15"), Ok(ymd_hm(2024, 1, 1, 9, 15)));
        assert!(matches!(
            parse_moment("tomorrow 3pm"),
            Err(InputError::InvalidDateTimeFormat(_))
        ));
        assert!(matches!(
            parse_moment("tomorrow"),
            Err(InputError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_format_moment() {
        assert_eq!(format_moment(&ymd_hm(2024, 10, 10, 0, 0)), "Oct 10 2024");
        assert_eq!(format_moment(&ymd_hm(2024, 10, 10, 18, 5)), "Oct 10 2024 18:05");
    }
}
