//! Layout engine: maps calendar dates to x pixels and entries to row bands.
//!
//! One pixel is one day. Row 0 holds the year/month axis; entry `i` of the
//! sorted schedule occupies row `i + 1`.

use time::{Date, Duration, Month};

use crate::config::ChartOptions;
use crate::confdata::ScheduleSet;
use crate::error::ChartError;

/// Left margin, equal to the right margin.
pub const LR_MARGIN: i64 = 10;
/// Top margin, equal to the bottom margin.
pub const TB_MARGIN: i64 = 10;
pub const CONF_NAME_LABEL_WIDTH: i64 = 120;
pub const CONF_NAME_LABEL_TOP_MARGIN: i64 = 12;

pub const BAR_TOP_MARGIN: i64 = 20;
pub const BAR_HEIGHT: i64 = 1;
pub const BAR_LABEL_TOP_MARGIN: i64 = 6;
pub const BAR_LABEL_BOTTOM_MARGIN: i64 = 4;
pub const DATE_LABEL_HEIGHT: i64 = 8;

pub const ROW_HEIGHT_WITH_NOTIFICATION: i64 = 40;
pub const ROW_HEIGHT_COMPACT: i64 = 30;

/// Days reserved past the last conference end so its label never clips.
/// Wide enough for a `2010/01/01-2010/01/02` style label.
pub const DOUBLE_DATE_WIDTH: i64 = 126;

/// Canvas geometry derived once from a finalized schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParameters {
    pub min_year: i32,
    pub max_year: i32,
    pub origin: Date,
    pub row_height: i64,
    pub entry_count: usize,
    pub figure_width: i64,
    pub figure_height: i64,
    pub image_width: i64,
    pub image_height: i64,
}

impl LayoutParameters {
    /// Compute the canvas for `schedule`. Call after sorting.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptySchedule`] for a schedule with no entries and
    /// [`ChartError::CalendarOverflow`] when the safety margin runs past the
    /// last representable year.
    pub fn compute(schedule: &ScheduleSet, options: &ChartOptions) -> Result<Self, ChartError> {
        let row_height =
            if options.text_notification { ROW_HEIGHT_WITH_NOTIFICATION } else { ROW_HEIGHT_COMPACT };

        let min_deadline = schedule.min_by_deadline()?.deadline_date();
        let max_end = schedule.max_by_end_date()?.end_date();

        let min_year = min_deadline.year();
        let max_year = max_end
            .checked_add(Duration::days(DOUBLE_DATE_WIDTH))
            .ok_or(ChartError::CalendarOverflow { year: max_end.year() })?
            .year();

        let origin = month_start(min_year, Month::January)?;
        let after_last = month_start(max_year + 1, Month::January)?;

        let entry_count = schedule.len();
        let rows = i64::try_from(entry_count + 1).unwrap_or(i64::MAX);
        let figure_width = (after_last - origin).whole_days() + CONF_NAME_LABEL_WIDTH;
        let figure_height = row_height.saturating_mul(rows);

        let layout = Self {
            min_year,
            max_year,
            origin,
            row_height,
            entry_count,
            figure_width,
            figure_height,
            image_width: figure_width + 2 * LR_MARGIN,
            image_height: figure_height + 2 * TB_MARGIN,
        };
        tracing::debug!(
            min_year,
            max_year,
            row_height,
            image_width = layout.image_width,
            image_height = layout.image_height,
            "computed layout"
        );
        Ok(layout)
    }

    /// Days from the origin (Jan 1 of `min_year`) to `date`.
    #[must_use]
    pub fn days_from_origin(&self, date: Date) -> i64 {
        (date - self.origin).whole_days()
    }

    /// Absolute x of `date`.
    #[must_use]
    pub fn x_for_date(&self, date: Date) -> i64 {
        LR_MARGIN + CONF_NAME_LABEL_WIDTH + self.days_from_origin(date)
    }

    /// Top y of row `row`; row 0 is the axis row.
    #[must_use]
    pub fn row_top(&self, row: usize) -> i64 {
        TB_MARGIN + self.row_height.saturating_mul(i64::try_from(row).unwrap_or(i64::MAX))
    }

    /// Top y of the band for sorted entry `index`.
    #[must_use]
    pub fn entry_top(&self, index: usize) -> i64 {
        self.row_top(index + 1)
    }

    /// Bar anchor for `date` inside the band starting at `entry_top`.
    #[must_use]
    pub fn bar_position(&self, entry_top: i64, date: Date) -> (i64, i64) {
        (self.x_for_date(date), entry_top + BAR_TOP_MARGIN)
    }

    /// Rows that get the highlight band: 1, 3, 5, ... up to the last entry row.
    pub fn banded_rows(&self) -> impl Iterator<Item = usize> {
        (1..=self.entry_count).step_by(2)
    }

    /// Years drawn on the axis, inclusive.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.min_year..=self.max_year
    }
}

/// First day of `month` in `year`.
///
/// # Errors
///
/// Returns [`ChartError::CalendarOverflow`] outside the supported year range.
pub fn month_start(year: i32, month: Month) -> Result<Date, ChartError> {
    Date::from_calendar_date(year, month, 1).map_err(|_| ChartError::CalendarOverflow { year })
}
