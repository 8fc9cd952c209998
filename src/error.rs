//! Error types for parsing, validating, laying out and writing a schedule.
//!
//! Every parse-time failure carries the 1-based line number it was detected
//! on. Nothing here is retryable: all conditions are local and deterministic.

use std::io;
use std::path::PathBuf;

use time::Date;

/// Failure returned by the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("line {line}: {reason}")]
    Header { line: usize, reason: HeaderError },
    #[error("line {line}: {source}")]
    Format { line: usize, source: FormatError },
    #[error("line {line}: {source}")]
    Validation { line: usize, source: ValidationError },
    #[error("line {line}: unknown command [{command}]")]
    UnknownCommand { line: usize, command: String },
    #[error(transparent)]
    EmptySchedule(#[from] EmptyScheduleError),
    #[error("year {year} is outside the supported calendar range")]
    CalendarOverflow { year: i32 },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl ChartError {
    /// Line number the failure was detected on, when it came from the input text.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Header { line, .. }
            | Self::Format { line, .. }
            | Self::Validation { line, .. }
            | Self::UnknownCommand { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// The `#! confdata <version>` header line is absent or wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("no conf data header; is it a confdata file? (#! confdata 2)")]
    Missing,
    #[error("illegal conf data header [{found}]; is it a confdata file? (#! confdata 2)")]
    Malformed { found: String },
    #[error("unsupported confdata version ({found}); current version is 2")]
    UnsupportedVersion { found: String },
}

/// A token on a data line has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("illegal year/month/day string [{text}], e.g., 2010/01/02")]
    BadDate { text: String },
    #[error("{command} line needs {expected} fields, found {found}")]
    TokenCount { command: &'static str, expected: usize, found: usize },
    #[error("illegal conference date range [{text}], e.g., 2010/06/28-2010/06/30")]
    BadDateRange { text: String },
}

/// A conference entry violates one of its temporal or naming invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("empty conference name")]
    EmptyName,
    #[error("conference short name is too long: {name} (max {max} characters)")]
    NameTooLong { name: String, max: usize },
    #[error("inconsistent conference date: start date {start} > end date {end}")]
    EndBeforeStart { start: Date, end: Date },
    #[error("inconsistent conference date: deadline {deadline} >= start date {start}")]
    DeadlineNotBeforeStart { deadline: Date, start: Date },
    #[error("inconsistent date: notification {notification} <= deadline {deadline}")]
    NotificationNotAfterDeadline { notification: Date, deadline: Date },
    #[error("inconsistent date: notification {notification} >= conference start {start}")]
    NotificationNotBeforeStart { notification: Date, start: Date },
}

/// An aggregate query ran against a schedule with no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("empty conference data: the schedule has no CONFITEM entries")]
pub struct EmptyScheduleError;
