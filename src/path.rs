//! Segment-wise path pattern matching.
//!
//! A pattern is split on `/` exactly like the request path. Segments starting
//! with `:` accept any value in that position; every other segment must be
//! equal. Nothing is normalised: a trailing slash adds an (empty) segment, so
//! `/users/` and `/users` are different paths.

/// Returns `true` if `path` has the shape described by `pattern`.
pub(crate) fn is_match(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(expected, actual)| expected.starts_with(':') || expected == actual)
}
