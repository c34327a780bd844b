//! Stateless hour parser.
//!
//! # Example
//!
//! ```
//! use rolegate_runtime::io::HourParser;
//!
//! assert_eq!(HourParser::parse(" 14\n"), Ok(14));
//! assert_eq!(HourParser::parse("-3"), Ok(-3));
//! assert!(HourParser::parse("tres").is_err());
//! ```

use rolegate_types::ErrorCode;
use thiserror::Error;

/// Hour text that is not a base-10 integer.
///
/// Range is not checked here; `-5` and `99` parse fine and are rejected
/// later by validation with a dedicated message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a whole number: '{input}'")]
pub struct HourParseError {
    /// The trimmed input.
    pub input: String,
}

impl ErrorCode for HourParseError {
    fn code(&self) -> &'static str {
        "PARSE_HOUR_NOT_INTEGER"
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Stateless hour parser.
pub struct HourParser;

impl HourParser {
    /// Parses a line as a base-10 integer after trimming.
    ///
    /// A leading `+` or `-` is accepted. Values that overflow `i64` are
    /// treated like any other non-integer.
    ///
    /// # Errors
    ///
    /// Returns [`HourParseError`] for empty, fractional or non-numeric text.
    pub fn parse(line: &str) -> Result<i64, HourParseError> {
        let trimmed = line.trim();
        trimmed.parse::<i64>().map_err(|_| HourParseError {
            input: trimmed.to_string(),
        })
    }
}
