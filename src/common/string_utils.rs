//! String utility functions for common text manipulation operations.
//!
//! Provides helpers shared by the repository list parser and the manifest
//! parser, both of which deal with hand-edited or remotely served text.

/// Remove every character outside printable ASCII (32..=126).
///
/// Control characters, carriage returns and any non-ASCII text are dropped,
/// so entries served with `\r\n` endings or stray bytes still parse cleanly.
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_non_printable("tool_1.0.tar\r"), "tool_1.0.tar");
/// assert_eq!(strip_non_printable("a\u{7f}b\u{e9}"), "ab");
/// ```
pub fn strip_non_printable(s: &str) -> String {
    s.chars().filter(|c| matches!(c, ' '..='~')).collect()
}

/// Join a base URL and a relative segment with exactly one `/` between them.
pub fn join_url(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}
