//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing lives in the parent module so the
//! text can be tested without capturing stderr.

use crate::boundary::BoundaryWarning;
use crate::resolver::Resolution;
use console::style;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Summary line for a resolution, e.g. "Calculated next version: v0.3.0"
///
/// Mentions the previous tag when there was one.
pub fn format_resolution(resolution: &Resolution) -> String {
    let kind = if resolution.is_prerelease {
        " (pre-release)"
    } else {
        ""
    };

    match &resolution.previous_tag {
        Some(previous) => format!(
            "Calculated next version: {}{} (from {})",
            style(&resolution.tag).green().bold(),
            kind,
            previous
        ),
        None => format!(
            "Calculated next version: {}{} (no previous release)",
            style(&resolution.tag).green().bold(),
            kind
        ),
    }
}
