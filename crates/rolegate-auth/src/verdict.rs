//! Permission verdicts.
//!
//! [`Verdict`] is what a [`PermissionPolicy`](crate::PermissionPolicy)
//! returns for a structurally valid request. A denial is an expected
//! outcome, not a program error, so it travels inside the verdict rather
//! than through `Result`.

use crate::AccessDenied;
use rolegate_types::PermissionRequest;
use std::fmt;

/// Result of evaluating a [`PermissionRequest`].
///
/// # Example
///
/// ```
/// use rolegate_auth::Verdict;
/// use rolegate_types::{Action, Hour, PermissionRequest, Role, TryNew};
///
/// let request = PermissionRequest::new(
///     Role::Admin,
///     Action::Read,
///     Hour::try_new(14).expect("in range"),
/// );
/// let verdict = Verdict::Granted(request);
/// assert!(verdict.is_allowed());
/// assert_eq!(verdict.status_str(), "granted");
/// assert_eq!(
///     verdict.to_string(),
///     "Acción permitida admin. Verifico sus permisos de admin, accion de read a las 2 p.m."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The request is allowed.
    Granted(PermissionRequest),
    /// The request is refused.
    Denied(AccessDenied),
}

impl Verdict {
    /// Returns `true` if the request is allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// Returns `true` if the request is refused.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Returns the denial reason, if any.
    #[must_use]
    pub fn denial(&self) -> Option<&AccessDenied> {
        match self {
            Self::Granted(_) => None,
            Self::Denied(reason) => Some(reason),
        }
    }

    /// Returns `"granted"` or `"denied"`.
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Granted(_) => "granted",
            Self::Denied(_) => "denied",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted(request) => write!(
                f,
                "Acción permitida {role}. Verifico sus permisos de {role}, accion de {action} a las {hour}",
                role = request.role,
                action = request.action,
                hour = request.hour,
            ),
            Self::Denied(reason) => write!(f, "{reason}"),
        }
    }
}

impl From<AccessDenied> for Verdict {
    fn from(reason: AccessDenied) -> Self {
        Self::Denied(reason)
    }
}
