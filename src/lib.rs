//! Conference schedule charts.
//!
//! Reads a `#! confdata 2` text file of conference deadlines and emits a fly
//! drawing script for a Gantt-style chart plus an HTML image map that makes
//! each chart row clickable.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`confdata`] | Record model, line parser and [`confdata::ScheduleSet`] |
//! | [`chart`] | Layout engine, primitive stream and image map emitters |
//! | [`config`] | Immutable run and chart options |
//! | [`output`] | Input reading and atomic artifact commits |
//! | [`error`] | Error taxonomy |
//!
//! The pipeline runs strictly forward: text → schedule → layout → primitives
//! → artifacts. [`generate`] does all of it in memory; nothing is written
//! until it succeeds.

pub mod chart;
pub mod confdata;
pub mod config;
pub mod error;
pub mod output;

use chart::{LayoutParameters, render_chart, render_image_map, to_fly};
use config::ChartOptions;
use error::ChartError;

/// Both rendered outputs of one run, held in memory until committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Fly drawing script.
    pub chart: String,
    /// HTML `<map>` block.
    pub image_map: String,
    pub layout: LayoutParameters,
    pub entry_count: usize,
}

/// Parse, sort, lay out and render `input`.
///
/// # Errors
///
/// Returns the first parse or validation error (with its line number), or
/// [`ChartError::EmptySchedule`] when the file declares no conferences.
pub fn generate(input: &str, options: &ChartOptions, map_name: &str) -> Result<Artifacts, ChartError> {
    let mut data = confdata::parse(input)?;
    data.schedule.sort_by_deadline();

    for entry in &data.schedule {
        tracing::debug!(
            name = entry.name(),
            start = %entry.start_date(),
            end = %entry.end_date(),
            deadline = %entry.deadline_date(),
            notification = ?entry.notification_date(),
            "entry sorted by deadline"
        );
    }
    for dateline in &data.datelines {
        tracing::debug!(date = %dateline.date, label = %dateline.label, "dateline not drawn");
    }

    let layout = LayoutParameters::compute(&data.schedule, options)?;
    let primitives = render_chart(&data.schedule, &layout, options)?;

    Ok(Artifacts {
        chart: to_fly(&primitives),
        image_map: render_image_map(&data.schedule, &layout, map_name),
        layout,
        entry_count: data.schedule.len(),
    })
}
