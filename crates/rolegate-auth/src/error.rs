//! Access denied error type.
//!
//! [`AccessDenied`] covers the two axes a role is checked on:
//!
//! ```text
//! Effective Permission = Capability(WHAT) ∩ HourWindow(WHEN)
//!                              │                  │
//!                    ActionNotPermitted     OutsideWindow
//! ```
//!
//! The `Display` text is the sentence shown to the user.

use crate::{Capability, HourWindow};
use rolegate_types::{Action, ErrorCode, Hour, Role};
use thiserror::Error;

/// Why a structurally valid request was refused.
///
/// # Example
///
/// ```
/// use rolegate_auth::{AccessDenied, Capability};
/// use rolegate_types::{Action, Role};
///
/// let err = AccessDenied::ActionNotPermitted {
///     role: Role::Editor,
///     action: Action::Delete,
///     allowed: Capability::READ | Capability::UPDATE,
/// };
/// assert_eq!(err.to_string(), "editor no posee el permiso delete");
/// assert_eq!(err.axis(), "action");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The role does not hold the capability for the action.
    #[error("{role} no posee el permiso {action}")]
    ActionNotPermitted {
        role: Role,
        action: Action,
        /// What the role does hold.
        allowed: Capability,
    },

    /// The action is held, but not at this hour.
    #[error("El rol {role} no tiene permisos para realizar acciones a las {hour}")]
    OutsideWindow {
        role: Role,
        hour: Hour,
        window: HourWindow,
    },
}

impl AccessDenied {
    /// Returns the axis that refused the request: `"action"` or `"hour"`.
    #[must_use]
    pub fn axis(&self) -> &'static str {
        match self {
            Self::ActionNotPermitted { .. } => "action",
            Self::OutsideWindow { .. } => "hour",
        }
    }

    /// Returns the role the request was made under.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::ActionNotPermitted { role, .. } | Self::OutsideWindow { role, .. } => *role,
        }
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::ActionNotPermitted { .. } => "ACCESS_ACTION_DENIED",
            Self::OutsideWindow { .. } => "ACCESS_HOUR_DENIED",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolegate_types::{assert_error_code, TryNew};

    #[test]
    fn action_denied_display() {
        let err = AccessDenied::ActionNotPermitted {
            role: Role::Viewer,
            action: Action::Update,
            allowed: Capability::READ,
        };
        assert_eq!(err.to_string(), "viewer no posee el permiso update");
        assert_eq!(err.axis(), "action");
        assert_eq!(err.role(), Role::Viewer);
        assert_error_code(&err, "ACCESS_");
    }

    #[test]
    fn outside_window_display_uses_twelve_hour_clock() {
        let err = AccessDenied::OutsideWindow {
            role: Role::Viewer,
            hour: Hour::try_new(19).expect("in range"),
            window: HourWindow::VIEWER,
        };
        assert_eq!(
            err.to_string(),
            "El rol viewer no tiene permisos para realizar acciones a las 7 p.m."
        );
        assert_eq!(err.axis(), "hour");
        assert_eq!(err.code(), "ACCESS_HOUR_DENIED");
        assert!(!err.is_recoverable());
    }
}
