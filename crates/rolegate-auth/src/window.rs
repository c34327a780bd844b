//! Hour windows.
//!
//! A role may be restricted to a half-open interval of hours
//! `[start, end)`. The upper bound can reach `25` so a window may
//! include the `24` midnight alias.

use rolegate_types::{ErrorCode, Hour, TryNew};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Half-open interval `[start, end)` of permitted hours.
///
/// # Example
///
/// ```
/// use rolegate_auth::HourWindow;
/// use rolegate_types::{Hour, TryNew};
///
/// let office = HourWindow::try_new((9, 18)).expect("valid window");
/// assert!(office.contains(Hour::try_new(9).expect("in range")));
/// assert!(office.contains(Hour::try_new(17).expect("in range")));
/// assert!(!office.contains(Hour::try_new(18).expect("in range")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct HourWindow {
    start: u8,
    end: u8,
}

impl HourWindow {
    /// Exclusive upper limit for `end`.
    pub const END_LIMIT: u8 = Hour::MAX + 1;

    /// Editor default: 8 a.m. up to, not including, 9 p.m.
    pub const EDITOR: Self = Self { start: 8, end: 21 };

    /// Viewer default: 9 a.m. up to, not including, 6 p.m.
    pub const VIEWER: Self = Self { start: 9, end: 18 };

    /// First permitted hour.
    #[must_use]
    pub fn start(self) -> u8 {
        self.start
    }

    /// First hour past the window.
    #[must_use]
    pub fn end(self) -> u8 {
        self.end
    }

    /// Returns `true` if `hour` falls inside the window.
    #[must_use]
    pub fn contains(self, hour: Hour) -> bool {
        (self.start..self.end).contains(&hour.value())
    }
}

impl TryNew for HourWindow {
    type Error = InvalidWindow;
    type Args = (u8, u8);

    fn try_new((start, end): (u8, u8)) -> Result<Self, Self::Error> {
        if start >= end || end > Self::END_LIMIT {
            return Err(InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }
}

impl TryFrom<[u8; 2]> for HourWindow {
    type Error = InvalidWindow;

    fn try_from([start, end]: [u8; 2]) -> Result<Self, Self::Error> {
        Self::try_new((start, end))
    }
}

impl From<HourWindow> for [u8; 2] {
    fn from(window: HourWindow) -> Self {
        [window.start, window.end]
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Window bounds that are empty, reversed, or past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "invalid hour window [{start}, {end}): need start < end <= {}",
    HourWindow::END_LIMIT
)]
pub struct InvalidWindow {
    pub start: u8,
    pub end: u8,
}

impl ErrorCode for InvalidWindow {
    fn code(&self) -> &'static str {
        "ACCESS_INVALID_WINDOW"
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
