//! Per-role rule envelope.

use crate::{Capability, HourWindow};
use rolegate_types::{Action, Hour};
use serde::{Deserialize, Serialize};

/// What a role may do, and when.
///
/// `window: None` means the role is not time-restricted.
///
/// # Example
///
/// ```
/// use rolegate_auth::{Capability, HourWindow, RoleRules};
/// use rolegate_types::{Action, Hour, TryNew};
///
/// let rules = RoleRules::new(Capability::READ, Some(HourWindow::VIEWER));
/// assert!(rules.permits(Action::Read));
/// assert!(!rules.admits(Hour::try_new(20).expect("in range")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRules {
    pub capabilities: Capability,
    pub window: Option<HourWindow>,
}

impl RoleRules {
    #[must_use]
    pub fn new(capabilities: Capability, window: Option<HourWindow>) -> Self {
        Self {
            capabilities,
            window,
        }
    }

    /// Every action, any hour.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::new(Capability::ALL, None)
    }

    /// Returns `true` if the role holds the capability for `action`.
    #[must_use]
    pub fn permits(&self, action: Action) -> bool {
        self.capabilities.permits(action)
    }

    /// Returns `true` if `hour` lies inside the role's window, or the
    /// role has none.
    #[must_use]
    pub fn admits(&self, hour: Hour) -> bool {
        self.window.map_or(true, |w| w.contains(hour))
    }
}
