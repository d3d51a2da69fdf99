//! Free-text slot parsing.
//!
//! Two grammars are recognized, checked in order with first match winning:
//!
//! 1. **Range** -- `H:MM-HH:MM`, arbitrary whitespace permitted around the
//!    dash. Valid only when `end > start`; ranges never wrap past midnight.
//! 2. **Open-ended** -- an "after" keyword (`после` / `after`,
//!    case-insensitive) followed by whitespace and one clock token. The
//!    interval closes at the last minute of the same day.
//!
//! Anything else fails with [`ParseError::Unrecognized`]. A matcher that
//! recognizes its grammar's *shape* but finds invalid values (hour 25,
//! inverted range) ends the search with that error rather than falling
//! through to the next grammar.

use crate::error::{ParseError, Result};
use crate::interval::{Interval, LAST_MINUTE};

/// Keywords that introduce an open-ended "after HH:MM" slot.
const AFTER_KEYWORDS: &[&str] = &["после", "after"];

/// Grammar matchers in priority order. `None` means the text does not have
/// this grammar's shape at all; `Some(result)` means it does, and the result
/// (valid interval or validation failure) is final.
const MATCHERS: &[fn(&str) -> Option<Result<Interval>>] = &[match_range, match_after];

/// Parse a free-text slot description into an [`Interval`].
///
/// Leading and trailing whitespace is ignored. Never returns a
/// partially-valid result: either the full text parses to a valid interval
/// or the call fails.
pub fn parse_interval(text: &str) -> Result<Interval> {
    let trimmed = text.trim();
    for matcher in MATCHERS {
        if let Some(parsed) = matcher(trimmed) {
            return parsed;
        }
    }
    Err(ParseError::Unrecognized(text.to_string()))
}

/// Render an interval in canonical `HH:MM-HH:MM` form.
///
/// Rendering a parsed range and re-parsing it reproduces the identical
/// interval.
pub fn render_interval(interval: &Interval) -> String {
    interval.to_string()
}

/// Range grammar: `clock [ws] - [ws] clock`.
fn match_range(text: &str) -> Option<Result<Interval>> {
    let (lhs, rhs) = text.split_once('-')?;
    let start = scan_clock(lhs.trim_end())?;
    let end = scan_clock(rhs.trim_start())?;
    Some(start.and_then(|s| end.and_then(|e| Interval::new(s, e))))
}

/// Open-ended grammar: `keyword ws clock`, closing at [`LAST_MINUTE`].
fn match_after(text: &str) -> Option<Result<Interval>> {
    let lowered = text.to_lowercase();
    let rest = AFTER_KEYWORDS
        .iter()
        .find_map(|keyword| lowered.strip_prefix(keyword))?;
    // The keyword must be a whole word, not a prefix of something longer.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let start = scan_clock(rest.trim_start())?;
    Some(start.and_then(|s| Interval::new(s, LAST_MINUTE)))
}

/// Scan one `H:MM` / `HH:MM` token into minutes from midnight.
///
/// `None` when the token does not look like a clock time at all;
/// `Some(Err(..))` when it has the right shape but the hour or minute is out
/// of range.
fn scan_clock(token: &str) -> Option<Result<u16>> {
    let (hour, minute) = token.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: u16 = hour.parse().ok()?;
    let m: u16 = minute.parse().ok()?;
    if h > 23 || m > 59 {
        return Some(Err(ParseError::TimeOutOfRange(token.to_string())));
    }
    Some(Ok(h * 60 + m))
}
