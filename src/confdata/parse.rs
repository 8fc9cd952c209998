//! Line-oriented parser for versioned confdata files.
//!
//! ```text
//! #! confdata 2
//! CONFITEM  EGSR2010   2010/06/28-2010/06/30    2010/04/09    2010/05/14
//! CONFITEM  SIGGASIA   2010/12/15-2010/12/18    2010/05/11    <unknown>
//! DATELINE  2010/05/11 11th_May
//! # comment
//! ```
//!
//! The first error aborts the parse; nothing parsed before it is returned.

use super::date::parse_date;
use super::entry::{ConferenceEntry, DateLine};
use super::schedule::ScheduleSet;
use crate::error::{ChartError, FormatError, HeaderError};

pub const CONFDATA_VERSION: &str = "2";
pub const UNKNOWN_DATE: &str = "<unknown>";

const HEADER_MAGIC: &str = "#!";
const HEADER_KIND: &str = "confdata";
const CONFITEM: &str = "CONFITEM";
const DATELINE: &str = "DATELINE";
const CONFITEM_FIELDS: usize = 5;
const DATELINE_FIELDS: usize = 3;

/// Everything a confdata file declares, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfData {
    pub schedule: ScheduleSet,
    pub datelines: Vec<DateLine>,
}

/// One classified, non-blank, non-comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Conference(ConferenceEntry),
    DateLine(DateLine),
}

/// Parse a whole confdata document.
///
/// # Errors
///
/// Returns the first header, format, validation or unknown-command error,
/// tagged with its 1-based line number.
pub fn parse(input: &str) -> Result<ConfData, ChartError> {
    let mut lines = input.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let Some((header_no, header)) = lines.next() else {
        return Err(ChartError::Header { line: 1, reason: HeaderError::Missing });
    };
    parse_header(header).map_err(|reason| ChartError::Header { line: header_no, reason })?;

    let mut data = ConfData::default();
    for (line_no, raw) in lines {
        match parse_line(raw, line_no)? {
            Some(Record::Conference(entry)) => data.schedule.push(entry),
            Some(Record::DateLine(dateline)) => data.datelines.push(dateline),
            None => {}
        }
    }

    tracing::debug!(entries = data.schedule.len(), datelines = data.datelines.len(), "parsed confdata");
    Ok(data)
}

/// Check the `#! confdata 2` header line.
///
/// # Errors
///
/// Returns a [`HeaderError`] describing how the line deviates.
pub fn parse_header(line: &str) -> Result<(), HeaderError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [magic, kind, version] = tokens.as_slice() else {
        return Err(HeaderError::Missing);
    };
    if *magic != HEADER_MAGIC || *kind != HEADER_KIND {
        return Err(HeaderError::Malformed { found: line.trim().to_owned() });
    }
    if *version != CONFDATA_VERSION {
        return Err(HeaderError::UnsupportedVersion { found: (*version).to_owned() });
    }
    Ok(())
}

/// Classify and parse one body line. Blank and `#` lines yield `None`.
///
/// # Errors
///
/// Returns the line's error tagged with `line_no`.
pub fn parse_line(raw: &str, line_no: usize) -> Result<Option<Record>, ChartError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return Ok(None);
    };
    match command {
        CONFITEM => parse_confitem(&tokens, line_no).map(|entry| Some(Record::Conference(entry))),
        DATELINE => parse_dateline(&tokens, line_no).map(|dateline| Some(Record::DateLine(dateline))),
        other => Err(ChartError::UnknownCommand { line: line_no, command: other.to_owned() }),
    }
}

fn parse_confitem(tokens: &[&str], line_no: usize) -> Result<ConferenceEntry, ChartError> {
    let format_err = |source| ChartError::Format { line: line_no, source };

    let [_, name, range, deadline, notification] = tokens else {
        return Err(format_err(FormatError::TokenCount {
            command: CONFITEM,
            expected: CONFITEM_FIELDS,
            found: tokens.len(),
        }));
    };

    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| format_err(FormatError::BadDateRange { text: (*range).to_owned() }))?;
    let start = parse_date(start).map_err(format_err)?;
    let end = parse_date(end).map_err(format_err)?;
    let deadline = parse_date(deadline).map_err(format_err)?;
    let notification = if *notification == UNKNOWN_DATE {
        None
    } else {
        Some(parse_date(notification).map_err(format_err)?)
    };

    ConferenceEntry::new(*name, start, end, deadline, notification)
        .map_err(|source| ChartError::Validation { line: line_no, source })
}

fn parse_dateline(tokens: &[&str], line_no: usize) -> Result<DateLine, ChartError> {
    let [_, date, label] = tokens else {
        return Err(ChartError::Format {
            line: line_no,
            source: FormatError::TokenCount { command: DATELINE, expected: DATELINE_FIELDS, found: tokens.len() },
        });
    };
    let date = parse_date(date).map_err(|source| ChartError::Format { line: line_no, source })?;
    Ok(DateLine { date, label: (*label).to_owned() })
}
