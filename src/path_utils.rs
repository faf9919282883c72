//! Path utilities for xpt
//!
//! Package names, tags and artifact filenames come from remote manifests and
//! end up as directory and file names in the cache. They are sanitized here
//! before they touch the filesystem.

/// Characters that are unsafe in a single path segment
/// Replaced with hyphens: `/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Make a string safe to use as one path segment.
///
/// Replaces unsafe characters and whitespace with hyphens. Returns "unknown"
/// for empty input and for the `.` and `..` segments, so the result can never
/// escape its parent directory.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(make_path_safe("tool_1.0.tar"), "tool_1.0.tar");
/// assert_eq!(make_path_safe("../etc"), "..-etc");
/// assert_eq!(make_path_safe(".."), "unknown");
/// ```
pub fn make_path_safe(segment: &str) -> String {
    let safe: String = segment
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .collect();

    match safe.as_str() {
        "" | "." | ".." => "unknown".to_string(),
        _ => safe,
    }
}

/// Last path segment of a URL, ignoring any query or fragment
pub fn url_file_name(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}
