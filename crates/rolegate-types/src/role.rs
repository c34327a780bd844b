//! Roles.

use crate::request::normalize;
use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The role a user claims when asking for access.
///
/// A closed set: anything else is rejected at parse time, so code that
/// holds a `Role` never has to handle an "unknown role" branch.
///
/// # Example
///
/// ```
/// use rolegate_types::Role;
///
/// assert_eq!(Role::parse("  Admin "), Ok(Role::Admin));
/// assert_eq!(Role::Viewer.to_string(), "viewer");
/// assert!(Role::parse("guest").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unrestricted access.
    Admin,
    /// Reads and updates during extended office hours.
    Editor,
    /// Reads during office hours.
    Viewer,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Editor, Self::Viewer];

    /// Returns the canonical lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    /// Parses a role name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRole`] carrying the normalized input.
    pub fn parse(input: &str) -> Result<Self, UnknownRole> {
        let normalized = normalize(input);
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or(UnknownRole { input: normalized })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Role text that does not name any [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: '{input}'")]
pub struct UnknownRole {
    /// The rejected input after trimming and lower-casing.
    pub input: String,
}

impl ErrorCode for UnknownRole {
    fn code(&self) -> &'static str {
        "PARSE_UNKNOWN_ROLE"
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}
