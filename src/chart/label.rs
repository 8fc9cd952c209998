//! Date label text for the chart.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::config::DateStyle;
use crate::confdata::ConferenceEntry;

const NUMERIC: &[BorrowedFormatItem<'static>] = format_description!("[month]/[day]");
const MONTH_NAME: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short]/[day]");
const DAY_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[day]");

/// `MM/DD` or `Mon/DD`.
#[must_use]
pub fn format_date(date: Date, style: DateStyle) -> String {
    let description = match style {
        DateStyle::Numeric => NUMERIC,
        DateStyle::MonthName => MONTH_NAME,
    };
    render(date, description)
}

/// Conference span label.
///
/// One-day events print a single date, same-month spans compress to
/// `06/28-30`, and spans crossing a month boundary print both dates.
#[must_use]
pub fn format_conference_dates(entry: &ConferenceEntry, style: DateStyle) -> String {
    let start = entry.start_date();
    let end = entry.end_date();
    let first = format_date(start, style);
    if start == end {
        return first;
    }
    let same_month = start.year() == end.year() && start.month() == end.month();
    let last = if same_month { render(end, DAY_ONLY) } else { format_date(end, style) };
    format!("{first}-{last}")
}

fn render(date: Date, description: &[BorrowedFormatItem<'_>]) -> String {
    // Only month and day components are requested, which a `Date` always has.
    date.format(description).unwrap_or_default()
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;
