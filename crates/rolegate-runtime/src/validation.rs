//! Structural validation of raw user input.
//!
//! Turns free-text role/action and an integer hour into a typed
//! [`PermissionRequest`], or a [`ValidationError`] naming the first field
//! that is not well-formed. No permission rule is consulted here.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! ```text
//! role   ∉ {admin, editor, viewer}           → UnknownRole
//! action ∉ {delete, update, create, read}    → UnknownAction
//! hour   ∉ 0..=24                            → HourOutOfRange
//! ```

use rolegate_types::{
    Action, ErrorCode, Hour, HourOutOfRange, PermissionRequest, Role, TryNew, UnknownAction,
    UnknownRole,
};
use thiserror::Error;

/// Input that failed structural validation.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El rol {} no es valido", .0.input)]
    UnknownRole(#[source] UnknownRole),

    #[error("La acción {} no es valida", .0.input)]
    UnknownAction(#[source] UnknownAction),

    #[error("La hora {} no puede ser mayor a 24 o menor a 0", .0.hour)]
    HourOutOfRange(#[source] HourOutOfRange),
}

impl ValidationError {
    /// Name of the offending field: `"role"`, `"action"` or `"hour"`.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "role",
            Self::UnknownAction(_) => "action",
            Self::HourOutOfRange(_) => "hour",
        }
    }
}

impl ErrorCode for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "VALIDATION_UNKNOWN_ROLE",
            Self::UnknownAction(_) => "VALIDATION_UNKNOWN_ACTION",
            Self::HourOutOfRange(_) => "VALIDATION_HOUR_OUT_OF_RANGE",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// A well-formed request together with its display hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub request: PermissionRequest,
    /// The hour on a 12-hour clock, e.g. `"3 p.m."`.
    pub display_hour: String,
}

/// Validates a raw `(role, action, hour)` triple.
///
/// Role and action are trimmed and lower-cased before lookup.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in role, action, hour order.
///
/// # Example
///
/// ```
/// use rolegate_runtime::validate;
///
/// let ok = validate(" Editor", "UPDATE", 15).expect("well-formed");
/// assert_eq!(ok.display_hour, "3 p.m.");
///
/// let err = validate("guest", "read", 10).unwrap_err();
/// assert_eq!(err.to_string(), "El rol guest no es valido");
/// ```
pub fn validate(role: &str, action: &str, hour: i64) -> Result<ValidatedRequest, ValidationError> {
    let role = Role::parse(role).map_err(ValidationError::UnknownRole)?;
    let action = Action::parse(action).map_err(ValidationError::UnknownAction)?;
    let hour = Hour::try_new(hour).map_err(ValidationError::HourOutOfRange)?;

    Ok(ValidatedRequest {
        request: PermissionRequest::new(role, action, hour),
        display_hour: hour.to_string(),
    })
}
