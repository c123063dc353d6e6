//! Console output for status lines, warnings, and errors.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// List the tag names an operation touched (or would touch in a dry run).
///
/// # Arguments
/// * `heading` - Summary line, e.g. "Created 3 releases"
/// * `names` - Tag names, in the order they were processed
pub fn display_release_list(heading: &str, names: &[String]) {
    println!("\n\x1b[1m{}\x1b[0m", heading);
    for name in names {
        println!("  - {}", name);
    }
}
