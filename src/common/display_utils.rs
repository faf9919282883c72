//! Display utility functions for formatting and printing CLI output.
//!
//! Keeps the styled warning line and human-readable sizes consistent across
//! commands.

use console::Style;

/// Format a byte count as a human-readable string
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Print a warning line to stderr; execution continues afterwards
pub fn print_warning(message: &str) {
    let yellow = Style::new().yellow().bold();
    eprintln!("{} {message}", yellow.apply_to("warning:"));
}

/// Print a per-item error line to stderr without aborting the command
pub fn print_error(message: &str) {
    let red = Style::new().red().bold();
    eprintln!("{} {message}", red.apply_to("error:"));
}
