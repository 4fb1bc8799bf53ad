//! Duration string parsing
//!
//! Accepts `mm:ss` and `hh:mm:ss`. Anything else maps to
//! [`INVALID_DURATION`] instead of an error.

use super::model::INVALID_DURATION;

/// Parse a duration string into total seconds
///
/// Returns [`INVALID_DURATION`] for empty input, a segment count other than
/// 2 or 3, non-integer or negative segments, and minutes/seconds out of range.
pub fn parse_duration(text: &str) -> i64 {
    if text.is_empty() {
        return INVALID_DURATION;
    }

    let parts: Vec<&str> = text.split(':').map(str::trim).collect();
    let seconds = match parts.len() {
        2 => parse_segments(&parts, &[None, Some(60)]),
        3 => parse_segments(&parts, &[None, Some(60), Some(60)]),
        _ => None,
    };

    seconds.unwrap_or(INVALID_DURATION)
}

/// Whether `text` is a duration the parser accepts
pub fn is_parsable_duration(text: &str) -> bool {
    parse_duration(text) >= 0
}

/// Fold segments most-significant first, each bounded by its optional limit
fn parse_segments(segments: &[&str], limits: &[Option<i64>]) -> Option<i64> {
    segments
        .iter()
        .zip(limits)
        .try_fold(0i64, |total, (segment, limit)| {
            let value: i64 = segment.parse().ok()?;
            if value < 0 || limit.is_some_and(|max| value >= max) {
                return None;
            }
            total.checked_mul(60)?.checked_add(value)
        })
}
