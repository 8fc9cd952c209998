//! HTML client-side image map with one clickable area per entry row.
//!
//! Each area links to `#<name>` with the name padded by `_` to the maximum
//! name length, so pages can keep stable anchors for every conference. Names
//! are HTML-escaped inside the attributes.

use super::layout::LayoutParameters;
use crate::confdata::ScheduleSet;

/// Render the `<map>` block for `schedule` in its current (sorted) order.
#[must_use]
pub fn render_image_map(schedule: &ScheduleSet, layout: &LayoutParameters, map_name: &str) -> String {
    let program = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let mut out = String::new();
    out.push_str(&format!("<!-- image map file generated by {program} -->\n"));
    out.push_str("<!-- conference schedule table -->\n");
    out.push_str(&format!("<!-- {program} version {version} -->\n"));
    out.push_str(&format!("<map name=\"{map_name}\">\n"));

    for (index, entry) in schedule.iter().enumerate() {
        let top = layout.entry_top(index);
        let bottom = top + layout.row_height;
        let anchor = escape_attribute(&entry.padded_name());
        out.push_str(&format!(
            "<area shape=\"rect\" coords=\"0,{top},{width},{bottom}\" href=\"#{anchor}\" alt=\"{anchor}\">\n",
            width = layout.image_width,
        ));
    }

    out.push_str("</map>\n");
    out
}

/// Escape the characters that would end or corrupt a quoted HTML attribute.
fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
