//! Chart layout and output: date-to-pixel layout, the fly primitive stream and
//! the HTML image map overlay.
//!
//! Both emitters read the same [`LayoutParameters`], so map areas line up with
//! the drawn rows.

pub mod imagemap;
pub mod label;
pub mod layout;
pub mod primitive;
pub mod render;

pub use imagemap::render_image_map;
pub use label::{format_conference_dates, format_date};
pub use layout::LayoutParameters;
pub use primitive::{Primitive, to_fly};
pub use render::render_chart;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
