//! Drawing primitives and their text form in the fly command dialect.
//!
//! Each primitive renders to one command line; text and line primitives are
//! preceded by a `#` comment line describing what they draw.

use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

// ── Palette (color-universal-design safe) ───────────────────────

pub const RED: Rgb = Rgb(235, 97, 16);
pub const BLUE: Rgb = Rgb(49, 106, 179);
pub const GREEN: Rgb = Rgb(6, 175, 122);
pub const ORANGE: Rgb = Rgb(245, 161, 0);
pub const LIGHTBLUE: Rgb = Rgb(229, 249, 237);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const GRAY: Rgb = Rgb(200, 200, 200);

pub const BAR_COLOR: Rgb = BLUE;
pub const DEADLINE_MARK_COLOR: Rgb = RED;
pub const CONF_MARK_COLOR: Rgb = GREEN;
pub const NOTIFICATION_MARK_COLOR: Rgb = ORANGE;
pub const ROW_BAND_COLOR: Rgb = LIGHTBLUE;

/// Built-in fly font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Small,
    Medium,
}

impl Font {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

/// A point in image pixels.
pub type Point = (i64, i64);

/// One drawing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// Free-form `#` line.
    Comment(String),
    New,
    Size { width: i64, height: i64 },
    Fill { x: i64, y: i64, color: Rgb },
    FilledRect { from: Point, to: Point, color: Rgb },
    Line { from: Point, to: Point, color: Rgb, comment: String },
    FilledTriangle { points: [Point; 3], color: Rgb },
    FilledCircle { center: Point, diameter: i64, color: Rgb },
    Text { at: Point, font: Font, text: String, comment: String },
}

impl Primitive {
    /// Black text with a describing comment.
    pub fn text(at: Point, font: Font, text: impl Into<String>, comment: impl Into<String>) -> Self {
        Self::Text { at, font, text: text.into(), comment: comment.into() }
    }

    pub fn line(from: Point, to: Point, color: Rgb, comment: impl Into<String>) -> Self {
        Self::Line { from, to, color, comment: comment.into() }
    }

    /// Triangle of height `size` with its apex above `(cx, cy)`.
    ///
    /// `size / 3` is integer division. The left x is truncated toward zero
    /// after subtracting the padded half-width; the right x adds the
    /// truncated half-width.
    #[must_use]
    pub fn triangle(center: Point, size: i64, color: Rgb) -> Self {
        let (cx, cy) = center;
        let third = size / 3;
        #[allow(clippy::cast_precision_loss)]
        let half_width = 3.0_f64.sqrt() * third as f64 + 0.99;
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let left = (cx as f64 - half_width) as i64;
        #[allow(clippy::cast_possible_truncation)]
        let right = cx + half_width as i64;
        Self::FilledTriangle { points: [(left, cy + third), (right, cy + third), (cx, cy - (2 * size) / 3)], color }
    }

    /// Axis-aligned square of side `side` around `center`.
    #[must_use]
    pub fn square(center: Point, side: i64, color: Rgb) -> Self {
        let x1 = center.0 - side / 2;
        let y1 = center.1 - side / 2;
        Self::FilledRect { from: (x1, y1), to: (x1 + side, y1 + side), color }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) if text.is_empty() => writeln!(f, "#"),
            Self::Comment(text) => writeln!(f, "# {text}"),
            Self::New => writeln!(f, "new"),
            Self::Size { width, height } => writeln!(f, "size {width}, {height}"),
            Self::Fill { x, y, color } => {
                writeln!(f, "fill {x}, {y}, {}, {}, {}", color.0, color.1, color.2)
            }
            Self::FilledRect { from, to, color } => {
                writeln!(f, "frect {},{},{},{},{color}", from.0, from.1, to.0, to.1)
            }
            Self::Line { from, to, color, comment } => {
                writeln!(
                    f,
                    "# line {comment}: ({}, {})-({}, {}), RGB ({}, {}, {})",
                    from.0, from.1, to.0, to.1, color.0, color.1, color.2
                )?;
                writeln!(f, "line {},{},{},{},{color}", from.0, from.1, to.0, to.1)
            }
            Self::FilledTriangle { points: [p1, p2, p3], color } => {
                writeln!(f, "fpoly {color},{},{},{},{},{},{}", p1.0, p1.1, p2.0, p2.1, p3.0, p3.1)
            }
            Self::FilledCircle { center, diameter, color } => {
                writeln!(f, "fcircle {},{},{diameter},{color}", center.0, center.1)
            }
            Self::Text { at, font, text, comment } => {
                writeln!(f, "# text {comment}: ({}, {}) [{text}]", at.0, at.1)?;
                writeln!(f, "string {BLACK},{},{},{},{text}", at.0, at.1, font.as_str())
            }
        }
    }
}

/// Concatenate the text form of `primitives`.
#[must_use]
pub fn to_fly(primitives: &[Primitive]) -> String {
    primitives.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "primitive_test.rs"]
mod tests;
