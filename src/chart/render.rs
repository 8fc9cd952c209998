//! Primitive stream emitter.
//!
//! Walks a sorted, laid-out schedule once and emits, in order: the header
//! block, alternating row bands, the year/month grid, then each entry's name,
//! bar, markers and date labels.

use time::Month;

use super::label::{format_conference_dates, format_date};
use super::layout::{
    BAR_HEIGHT, BAR_LABEL_BOTTOM_MARGIN, BAR_LABEL_TOP_MARGIN, CONF_NAME_LABEL_TOP_MARGIN, DATE_LABEL_HEIGHT,
    LR_MARGIN, LayoutParameters, TB_MARGIN, month_start,
};
use super::primitive::{
    BAR_COLOR, BLACK, CONF_MARK_COLOR, DEADLINE_MARK_COLOR, Font, GRAY, NOTIFICATION_MARK_COLOR, Primitive,
    ROW_BAND_COLOR, WHITE,
};
use crate::config::ChartOptions;
use crate::confdata::{ConferenceEntry, ScheduleSet};
use crate::error::ChartError;

pub const TRIANGLE_SIZE: i64 = 7;
pub const CIRCLE_SIZE: i64 = 8;
pub const SQUARE_SIZE: i64 = 7;

/// Horizontal gap between a month line and its label.
const MONTH_LABEL_GAP: i64 = 4;

const LINE_MONTHS: [Month; 11] = [
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Build the full primitive stream for `schedule`.
///
/// # Errors
///
/// Returns [`ChartError::CalendarOverflow`] if a grid month cannot be
/// represented; [`LayoutParameters::compute`] already rules this out for
/// layouts it produced.
pub fn render_chart(
    schedule: &ScheduleSet,
    layout: &LayoutParameters,
    options: &ChartOptions,
) -> Result<Vec<Primitive>, ChartError> {
    let mut out = Vec::new();
    push_header(layout, &mut out);
    push_row_bands(layout, &mut out);
    push_month_grid(layout, &mut out)?;
    for (index, entry) in schedule.iter().enumerate() {
        push_entry(entry, layout.entry_top(index), layout, options, &mut out);
    }
    Ok(out)
}

fn push_header(layout: &LayoutParameters, out: &mut Vec<Primitive>) {
    out.extend([
        Primitive::Comment(String::new()),
        Primitive::Comment("conference schedule table".to_owned()),
        Primitive::Comment(format!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))),
        Primitive::Comment(String::new()),
        Primitive::New,
        Primitive::Size { width: layout.image_width, height: layout.image_height },
        Primitive::Fill { x: 1, y: 1, color: WHITE },
    ]);
}

fn push_row_bands(layout: &LayoutParameters, out: &mut Vec<Primitive>) {
    for row in layout.banded_rows() {
        let top = layout.row_top(row);
        out.push(Primitive::FilledRect {
            from: (0, top),
            to: (layout.image_width, top + layout.row_height),
            color: ROW_BAND_COLOR,
        });
    }
}

fn push_month_grid(layout: &LayoutParameters, out: &mut Vec<Primitive>) -> Result<(), ChartError> {
    let axis_y = TB_MARGIN + layout.row_height;
    let label_y = axis_y - layout.row_height / 2;
    let line_bottom = axis_y + layout.figure_height;

    for year in layout.years() {
        let year_x = layout.x_for_date(month_start(year, Month::January)?);

        out.push(Primitive::text((year_x, axis_y - layout.row_height), Font::Small, year.to_string(), "year"));
        out.push(Primitive::line((year_x, label_y), (year_x, line_bottom), BLACK, format!("year {year}")));
        out.push(Primitive::text((year_x + MONTH_LABEL_GAP, label_y), Font::Small, "Jan", "month Jan"));

        let jun_x = layout.x_for_date(month_start(year, Month::June)?);
        out.push(Primitive::text((jun_x + MONTH_LABEL_GAP, label_y), Font::Small, "Jun", "month Jun"));

        for month in LINE_MONTHS {
            let x = layout.x_for_date(month_start(year, month)?);
            out.push(Primitive::line((x, label_y), (x, line_bottom), GRAY, format!("month {}", u8::from(month))));
        }
    }
    Ok(())
}

fn push_entry(
    entry: &ConferenceEntry,
    top: i64,
    layout: &LayoutParameters,
    options: &ChartOptions,
    out: &mut Vec<Primitive>,
) {
    let name = entry.name();
    out.push(Primitive::text(
        (LR_MARGIN, top + CONF_NAME_LABEL_TOP_MARGIN),
        Font::Medium,
        name,
        format!("conference label: {name}"),
    ));

    let deadline = layout.bar_position(top, entry.deadline_date());
    let conference = layout.bar_position(top, entry.end_date());
    let bar_bottom = conference.1 + BAR_HEIGHT;

    out.push(Primitive::FilledRect { from: deadline, to: (conference.0, bar_bottom), color: BAR_COLOR });
    out.push(Primitive::triangle(deadline, TRIANGLE_SIZE, DEADLINE_MARK_COLOR));
    out.push(Primitive::square((conference.0, bar_bottom), SQUARE_SIZE, CONF_MARK_COLOR));

    let notification = entry.notification_date().map(|date| (date, layout.bar_position(top, date)));
    if let Some((_, at)) = notification {
        out.push(Primitive::FilledCircle { center: at, diameter: CIRCLE_SIZE, color: NOTIFICATION_MARK_COLOR });
    }

    let above_bar = DATE_LABEL_HEIGHT + BAR_LABEL_TOP_MARGIN;
    if options.text_deadline {
        let label = format_date(entry.deadline_date(), options.date_style);
        let comment = format!("deadline: {label}");
        out.push(Primitive::text((deadline.0, deadline.1 - above_bar), Font::Small, label, comment));
    }
    if options.text_conference {
        let label = format_conference_dates(entry, options.date_style);
        let comment = format!("conference date: {label}");
        out.push(Primitive::text((conference.0, conference.1 - above_bar), Font::Small, label, comment));
    }
    if let Some((date, at)) = notification {
        if options.text_notification {
            let label = format_date(date, options.date_style);
            let comment = format!("notification date: {label}");
            out.push(Primitive::text((at.0, at.1 + BAR_LABEL_BOTTOM_MARGIN), Font::Small, label, comment));
        }
    }
}
