//! Unified error interface for rolegate.
//!
//! Every error enum in the workspace implements [`ErrorCode`] so the
//! driver and the binary can log a stable machine-readable code next to
//! the human-readable message, and decide whether a round can simply be
//! retried.
//!
//! # Example
//!
//! ```
//! use rolegate_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     Missing,
//!     Corrupt,
//! }
//!
//! impl ErrorCode for LookupError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Missing => "LOOKUP_MISSING",
//!             Self::Corrupt => "LOOKUP_CORRUPT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Missing)
//!     }
//! }
//!
//! assert_eq!(LookupError::Missing.code(), "LOOKUP_MISSING");
//! assert!(!LookupError::Corrupt.is_recoverable());
//! ```

/// Machine-readable error code plus recoverability.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, e.g. `"PARSE_UNKNOWN_ROLE"`
/// - **Namespace-prefixed** by the owning module (`PARSE_`, `VALIDATION_`,
///   `ACCESS_`, `CONFIG_`, `DRIVER_`)
/// - **Stable** once published
///
/// # Recoverability
///
/// An error is recoverable when the user can fix it by typing something
/// else on the next round (bad role, non-numeric hour). Configuration and
/// terminal failures are not.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying with different input may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code is non-empty, carries `expected_prefix`
/// and is UPPER_SNAKE_CASE.
///
/// Intended for tests that pin down every variant of an error enum.
///
/// # Panics
///
/// Panics with a descriptive message if any check fails.
///
/// # Example
///
/// ```
/// use rolegate_types::{assert_error_code, ErrorCode};
///
/// struct Timeout;
///
/// impl ErrorCode for Timeout {
///     fn code(&self) -> &'static str { "DRIVER_TIMEOUT" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_code(&Timeout, "DRIVER_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Runs [`assert_error_code`] over every error in `errors`.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl ErrorCode for Fixed {
        fn code(&self) -> &'static str {
            self.0
        }

        fn is_recoverable(&self) -> bool {
            false
        }
    }

    #[test]
    fn upper_snake_case_detection() {
        assert!(is_upper_snake_case("PARSE_UNKNOWN_ROLE"));
        assert!(is_upper_snake_case("A1_B2"));
        assert!(!is_upper_snake_case("parse_role"));
        assert!(!is_upper_snake_case("_LEADING"));
        assert!(!is_upper_snake_case("TRAILING_"));
        assert!(!is_upper_snake_case("DOUBLE__UNDERSCORE"));
        assert!(!is_upper_snake_case(""));
    }

    #[test]
    fn assert_error_code_accepts_valid() {
        assert_error_code(&Fixed("ACCESS_DENIED"), "ACCESS_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_error_code_rejects_wrong_prefix() {
        assert_error_code(&Fixed("CONFIG_READ"), "ACCESS_");
    }

    #[test]
    #[should_panic(expected = "UPPER_SNAKE_CASE")]
    fn assert_error_code_rejects_lowercase() {
        assert_error_code(&Fixed("ACCESS_denied"), "ACCESS_");
    }

    #[test]
    fn assert_error_codes_checks_all() {
        assert_error_codes(&[Fixed("DRIVER_IO"), Fixed("DRIVER_READLINE")], "DRIVER_");
    }
}
