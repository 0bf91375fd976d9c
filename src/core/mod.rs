//! Core utilities shared by the parser, the task model and output.

mod datetime;

pub use datetime::{
    format_moment, parse_date, parse_date_time, parse_moment, DATE_PATTERN, DATE_TIME_PATTERN,
};
