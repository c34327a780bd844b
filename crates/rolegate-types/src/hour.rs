//! Hour of day.

use crate::{ErrorCode, TryNew};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An hour of the day in `0..=24`.
///
/// `24` is accepted as an alias for midnight. The invariant is enforced
/// by [`TryNew`]; there is no infallible constructor.
///
/// [`Display`](fmt::Display) renders the 12-hour clock form used in every
/// user-facing message:
///
/// | hour | rendered |
/// |------|----------|
/// | 0 | `12 a.m.` |
/// | 1–11 | `{h} a.m.` |
/// | 12 | `12 p.m.` |
/// | 13–23 | `{h-12} p.m.` |
/// | 24 | `0 a.m.` |
///
/// # Example
///
/// ```
/// use rolegate_types::{Hour, TryNew};
///
/// let hour = Hour::try_new(14).expect("14 is in range");
/// assert_eq!(hour.value(), 14);
/// assert_eq!(hour.to_string(), "2 p.m.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Smallest accepted hour.
    pub const MIN: u8 = 0;
    /// Largest accepted hour (midnight alias).
    pub const MAX: u8 = 24;

    /// Returns the raw hour value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Iterates every valid hour, `0..=24`.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryNew for Hour {
    type Error = HourOutOfRange;
    type Args = i64;

    fn try_new(hour: i64) -> Result<Self, Self::Error> {
        u8::try_from(hour)
            .ok()
            .filter(|h| (Self::MIN..=Self::MAX).contains(h))
            .map(Self)
            .ok_or(HourOutOfRange { hour })
    }
}

impl TryFrom<i64> for Hour {
    type Error = HourOutOfRange;

    fn try_from(hour: i64) -> Result<Self, Self::Error> {
        Self::try_new(hour)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "12 a.m."),
            h @ 1..=11 => write!(f, "{h} a.m."),
            12 => write!(f, "12 p.m."),
            h @ 13..=23 => write!(f, "{} p.m.", h - 12),
            _ => write!(f, "0 a.m."),
        }
    }
}

/// Hour value outside `0..=24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hour {hour} out of range {}..={}", Hour::MIN, Hour::MAX)]
pub struct HourOutOfRange {
    /// The rejected value.
    pub hour: i64,
}

impl ErrorCode for HourOutOfRange {
    fn code(&self) -> &'static str {
        "PARSE_HOUR_OUT_OF_RANGE"
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}
