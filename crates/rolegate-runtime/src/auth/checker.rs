//! The built-in role table.
//!
//! [`DefaultPolicy`] is the concrete [`PermissionPolicy`] used by the CLI.
//!
//! | Role | Capabilities | Window |
//! |------|--------------|--------|
//! | admin | delete, update, create, read | any hour |
//! | editor | read, update | `[8, 21)` |
//! | viewer | read | `[9, 18)` |
//!
//! Any row may be replaced from configuration with
//! [`DefaultPolicy::from_config`].
//!
//! # Example
//!
//! ```
//! use rolegate_auth::PermissionPolicy;
//! use rolegate_runtime::DefaultPolicy;
//! use rolegate_types::{Action, Hour, PermissionRequest, Role, TryNew};
//!
//! let policy = DefaultPolicy::new();
//! let late_edit = PermissionRequest::new(
//!     Role::Editor,
//!     Action::Update,
//!     Hour::try_new(21).expect("in range"),
//! );
//! assert!(policy.evaluate(&late_edit).is_denied());
//! ```

use crate::config::RolesConfig;
use rolegate_auth::{Capability, HourWindow, PermissionPolicy, RoleRules};
use rolegate_types::Role;
use tracing::debug;

/// Role table keyed by the closed [`Role`] enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPolicy {
    admin: RoleRules,
    editor: RoleRules,
    viewer: RoleRules,
}

impl DefaultPolicy {
    /// Creates the policy with the built-in table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            admin: RoleRules::unrestricted(),
            editor: RoleRules::new(
                Capability::READ | Capability::UPDATE,
                Some(HourWindow::EDITOR),
            ),
            viewer: RoleRules::new(Capability::READ, Some(HourWindow::VIEWER)),
        }
    }

    /// Creates the policy, replacing rows that `roles` overrides.
    #[must_use]
    pub fn from_config(roles: &RolesConfig) -> Self {
        let mut policy = Self::new();
        for role in Role::ALL {
            if let Some(section) = roles.get(role) {
                let rules = section.to_rules();
                debug!(
                    role = %role,
                    capabilities = %rules.capabilities,
                    window = ?rules.window,
                    "Role rules overridden by config"
                );
                *policy.slot_mut(role) = rules;
            }
        }
        policy
    }

    fn slot_mut(&mut self, role: Role) -> &mut RoleRules {
        match role {
            Role::Admin => &mut self.admin,
            Role::Editor => &mut self.editor,
            Role::Viewer => &mut self.viewer,
        }
    }
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionPolicy for DefaultPolicy {
    fn rules_for(&self, role: Role) -> RoleRules {
        match role {
            Role::Admin => self.admin,
            Role::Editor => self.editor,
            Role::Viewer => self.viewer,
        }
    }
}
