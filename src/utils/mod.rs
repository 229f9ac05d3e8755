//! Utilities for preparing values for display and recording.

/// Truncates a string to at most `max` characters.
///
/// Operates on characters rather than bytes so multi-byte input never splits
/// a UTF-8 sequence. No ellipsis is appended; recorded evidence keeps the
/// exact leading characters of the original value.
///
/// # Arguments
///
/// * `value` - The string to truncate
/// * `max` - Maximum number of characters to keep
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
