//! Actions.

use crate::request::normalize;
use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The operation a user wants to perform.
///
/// Structural validation only checks membership in this set. Whether a
/// given role may perform the action is decided later by the permission
/// policy.
///
/// # Example
///
/// ```
/// use rolegate_types::Action;
///
/// assert_eq!(Action::parse("READ"), Ok(Action::Read));
/// assert!(Action::parse("execute").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Delete,
    Update,
    Create,
    Read,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 4] = [Self::Delete, Self::Update, Self::Create, Self::Read];

    /// Returns the canonical lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Create => "create",
            Self::Read => "read",
        }
    }

    /// Parses an action name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAction`] carrying the normalized input.
    pub fn parse(input: &str) -> Result<Self, UnknownAction> {
        let normalized = normalize(input);
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or(UnknownAction { input: normalized })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Action text that does not name any [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: '{input}'")]
pub struct UnknownAction {
    /// The rejected input after trimming and lower-casing.
    pub input: String,
}

impl ErrorCode for UnknownAction {
    fn code(&self) -> &'static str {
        "PARSE_UNKNOWN_ACTION"
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_error_code;

    #[test]
    fn parse_all_actions() {
        assert_eq!(Action::parse("delete"), Ok(Action::Delete));
        assert_eq!(Action::parse("update"), Ok(Action::Update));
        assert_eq!(Action::parse("create"), Ok(Action::Create));
        assert_eq!(Action::parse("read"), Ok(Action::Read));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Action::parse("Delete"), Ok(Action::Delete));
        assert_eq!(Action::parse(" UPDATE "), Ok(Action::Update));
    }

    #[test]
    fn parse_unknown() {
        let err = Action::parse("Execute").expect_err("execute is not an action");
        assert_eq!(err.input, "execute");
        assert_error_code(&err, "PARSE_");
    }

    #[test]
    fn display_is_canonical() {
        let names: Vec<String> = Action::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["delete", "update", "create", "read"]);
    }
}
