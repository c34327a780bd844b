//! The request value evaluated on every round.

use crate::{Action, Hour, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical form of free-text role/action input: trimmed, lower-cased.
///
/// Applied exactly once, by [`Role::parse`] and [`Action::parse`].
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A structurally valid `(role, action, hour)` triple.
///
/// Built fresh from user input on every round and never mutated.
///
/// # Example
///
/// ```
/// use rolegate_types::{Action, Hour, PermissionRequest, Role, TryNew};
///
/// let hour = Hour::try_new(9).expect("9 is in range");
/// let request = PermissionRequest::new(Role::Editor, Action::Update, hour);
/// assert_eq!(request.to_string(), "editor/update @ 9 a.m.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub role: Role,
    pub action: Action,
    pub hour: Hour,
}

impl PermissionRequest {
    #[must_use]
    pub fn new(role: Role, action: Action, hour: Hour) -> Self {
        Self { role, action, hour }
    }
}

impl fmt::Display for PermissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} @ {}", self.role, self.action, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TryNew;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  AdMiN\n"), "admin");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("Lectura"), "lectura");
    }

    #[test]
    fn request_json_shape() {
        let hour = Hour::try_new(14).expect("14 is in range");
        let request = PermissionRequest::new(Role::Admin, Action::Read, hour);
        let json = serde_json::to_value(request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "role": "admin", "action": "read", "hour": 14 })
        );
    }
}
