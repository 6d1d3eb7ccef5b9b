//! Fixed-format date-time codec.
//!
//! Due instants travel through the whole system as `YYYY-MM-DD HH:mm`
//! (24h, zero-padded, single space, no timezone suffix) and are stored as
//! naive host-local wall-clock times.

use crate::error::KairoError;
use chrono::NaiveDateTime;

/// The one accepted input/output shape.
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Check whether `raw` (already trimmed) has the exact `YYYY-MM-DD HH:mm`
/// shape: field widths, zero padding, and separators. Calendar validity is
/// left to [`parse_due`].
pub fn is_due_shaped(raw: &str) -> bool {
    let b = raw.as_bytes();
    if b.len() != 16 {
        return false;
    }
    for (i, c) in b.iter().enumerate() {
        let ok = match i {
            4 | 7 => *c == b'-',
            10 => *c == b' ',
            13 => *c == b':',
            _ => c.is_ascii_digit(),
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Parse a `YYYY-MM-DD HH:mm` string into a naive local instant.
///
/// Any deviation — wrong field widths, missing padding, invalid calendar
/// date, out-of-range hour/minute, trailing text after trimming — is a
/// [`KairoError::Parse`]. Callers must not fabricate a fallback instant.
pub fn parse_due(raw: &str) -> Result<NaiveDateTime, KairoError> {
    let trimmed = raw.trim();
    if !is_due_shaped(trimmed) {
        return Err(KairoError::Parse(raw.to_string()));
    }
    NaiveDateTime::parse_from_str(trimmed, DUE_FORMAT)
        .map_err(|_| KairoError::Parse(raw.to_string()))
}

/// Format an instant back to the canonical `YYYY-MM-DD HH:mm` shape.
///
/// Inverse of [`parse_due`]: `format_due(parse_due(s)?) == s.trim()` for
/// every string the input grammar accepts.
pub fn format_due(t: NaiveDateTime) -> String {
    t.format(DUE_FORMAT).to_string()
}
