//! Diagnostics for humans reading the CI log.
//!
//! All of it goes to stderr; stdout is reserved for the output values.

pub mod formatter;

use crate::boundary::BoundaryWarning;
use crate::resolver::Resolution;

pub use formatter::{format_boundary_warning, format_error, format_resolution, format_status};

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Show the warnings attached to a resolution
///
/// Ignored tags are routine in most repositories and only shown when `verbose`.
pub fn display_warnings(warnings: &[BoundaryWarning], verbose: bool) {
    for warning in warnings {
        if verbose || !warning.is_ignored_tag() {
            display_boundary_warning(warning);
        }
    }
}

pub fn display_resolution(resolution: &Resolution) {
    eprintln!("{}", format_resolution(resolution));
}
