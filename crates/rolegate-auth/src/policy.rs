//! Permission policy trait.
//!
//! Defines [`PermissionPolicy`], the abstract per-role rule source. The
//! trait lives here so the runtime and tests can supply their own tables
//! without depending on each other.
//!
//! # Architecture
//!
//! ```text
//! PermissionPolicy trait (rolegate-auth)   <- abstract
//!          │
//!          └── DefaultPolicy (rolegate-runtime) <- role table, configurable
//! ```
//!
//! # Evaluation Order
//!
//! ```text
//! rules = policy.rules_for(role)          (exhaustive over Role)
//!   action ∉ rules.capabilities  → Denied(ActionNotPermitted)
//!   hour   ∉ rules.window        → Denied(OutsideWindow)
//!   otherwise                    → Granted
//! ```
//!
//! The action axis is checked before the hour axis, so an editor asking
//! to delete at 3 a.m. is told about the action, not the hour.

use crate::{AccessDenied, RoleRules, Verdict};
use rolegate_types::{PermissionRequest, Role};

/// Source of per-role rules.
///
/// Implementors only need [`rules_for`](Self::rules_for); the default
/// [`evaluate`](Self::evaluate) applies the rules in the documented order.
///
/// # Example
///
/// ```
/// use rolegate_auth::{PermissionPolicy, RoleRules};
/// use rolegate_types::{Action, Hour, PermissionRequest, Role, TryNew};
///
/// struct OpenPolicy;
///
/// impl PermissionPolicy for OpenPolicy {
///     fn rules_for(&self, _role: Role) -> RoleRules {
///         RoleRules::unrestricted()
///     }
/// }
///
/// let request = PermissionRequest::new(
///     Role::Viewer,
///     Action::Delete,
///     Hour::try_new(3).expect("in range"),
/// );
/// assert!(OpenPolicy.evaluate(&request).is_allowed());
/// ```
pub trait PermissionPolicy: Send + Sync {
    /// Returns the rules for `role`.
    fn rules_for(&self, role: Role) -> RoleRules;

    /// Decides whether `request` is allowed.
    fn evaluate(&self, request: &PermissionRequest) -> Verdict {
        let rules = self.rules_for(request.role);

        if !rules.permits(request.action) {
            return AccessDenied::ActionNotPermitted {
                role: request.role,
                action: request.action,
                allowed: rules.capabilities,
            }
            .into();
        }

        if !rules.admits(request.hour) {
            // only a windowed role can refuse an hour
            if let Some(window) = rules.window {
                return AccessDenied::OutsideWindow {
                    role: request.role,
                    hour: request.hour,
                    window,
                }
                .into();
            }
        }

        Verdict::Granted(*request)
    }
}
