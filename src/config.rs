//! Run configuration resolved once from the command line.
//!
//! `ChartOptions` is the only state the layout and renderer read; it is built
//! up front and passed by reference, never mutated mid-run.

use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_IMAGE_MAP_FILENAME: &str = "cg_conf_table_imagemap.html";
pub const DEFAULT_MAP_NAME: &str = "cg_conf_table_imagemap";

/// Path spelling that selects a standard stream instead of a file.
pub const STDIO_PATH: &str = "-";

/// How dates are printed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `06/28`
    #[default]
    Numeric,
    /// `Jun/28`
    MonthName,
}

/// Label switches consumed by layout and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub text_deadline: bool,
    pub text_conference: bool,
    pub text_notification: bool,
    pub date_style: DateStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { text_deadline: true, text_conference: true, text_notification: true, date_style: DateStyle::Numeric }
    }
}

/// Where the confdata text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_arg(raw: &str) -> Self {
        if raw == STDIO_PATH { Self::Stdin } else { Self::File(PathBuf::from(raw)) }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where a rendered artifact is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_arg(raw: &str) -> Self {
        if raw == STDIO_PATH { Self::Stdout } else { Self::File(PathBuf::from(raw)) }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything one invocation needs, resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: InputSource,
    pub chart: OutputTarget,
    pub image_map: OutputTarget,
    pub map_name: String,
    pub options: ChartOptions,
    pub verbose: bool,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
