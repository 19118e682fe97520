//! Inspectors for generated source text.

/// Returns `true` when `bytes` contains no carriage returns.
#[must_use]
pub fn has_only_line_feeds(bytes: &[u8]) -> bool {
    !bytes.contains(&b'\r')
}

/// Returns the lines of `text` that contain something other than
/// whitespace.
#[must_use]
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}
