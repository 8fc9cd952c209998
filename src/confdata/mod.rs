//! Confdata input: record model, parser and the schedule they populate.
//!
//! A file is checked line by line; every `CONFITEM` becomes a validated
//! [`ConferenceEntry`] appended to a [`ScheduleSet`] in file order.

pub mod date;
pub mod entry;
pub mod parse;
pub mod schedule;

pub use date::parse_date;
pub use entry::{ConferenceEntry, DateLine, MAX_CONF_NAME_LENGTH};
pub use parse::{ConfData, Record, parse, parse_header, parse_line};
pub use schedule::ScheduleSet;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
