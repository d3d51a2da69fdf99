//! The `Interval` type -- a half-open time range on a single calendar day.
//!
//! An interval is an ordered pair of minute-of-day integers `(start, end)`
//! with `start < end <= 1439`, denoting the range `[start, end)`. Intervals
//! render to and parse from the canonical `HH:MM-HH:MM` form, which is also
//! the persisted representation (the serde impls go through that text form).

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::parse::parse_interval;

/// The last addressable minute of a day (23:59). Open-ended "after HH:MM"
/// slots close here; intervals never span into the next day.
pub const LAST_MINUTE: u16 = 23 * 60 + 59;

/// A half-open time range `[start, end)` in minutes from midnight.
///
/// Immutable once constructed; ordering is by start, then end. Two intervals
/// are equal iff their bounds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: u16,
    end: u16,
}

impl Interval {
    /// Construct an interval, enforcing `start < end <= LAST_MINUTE`.
    ///
    /// # Errors
    /// Returns [`ParseError::TimeOutOfRange`] when either bound exceeds the
    /// day, and [`ParseError::EmptyRange`] for zero-length or inverted pairs.
    pub fn new(start: u16, end: u16) -> Result<Self, ParseError> {
        if start > LAST_MINUTE || end > LAST_MINUTE {
            return Err(ParseError::TimeOutOfRange(bounds_text(start, end)));
        }
        if end <= start {
            return Err(ParseError::EmptyRange(bounds_text(start, end)));
        }
        Ok(Interval { start, end })
    }

    /// Start bound in minutes from midnight (inclusive).
    pub fn start(&self) -> u16 {
        self.start
    }

    /// End bound in minutes from midnight (exclusive).
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Length of the interval in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    /// Bounded intersection with another interval on the same date.
    ///
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`; the
    /// overlap is `[max(starts), min(ends))`. Touching endpoints are not an
    /// overlap -- the ranges are half-open.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Interval { start, end })
        } else {
            None
        }
    }
}

/// Format a minute-of-day as `HH:MM`, zero-padded.
fn fmt_clock(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn bounds_text(start: u16, end: u16) -> String {
    format!("{}-{}", fmt_clock(start), fmt_clock(end))
}

impl fmt::Display for Interval {
    /// Canonical rendering: `HH:MM-HH:MM`, zero-padded, no whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", fmt_clock(self.start), fmt_clock(self.end))
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
