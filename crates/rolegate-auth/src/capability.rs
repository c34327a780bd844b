//! Capability-based action model.
//!
//! A role holds a [`Capability`] set; a request is allowed on the action
//! axis when the capability for its [`Action`] is contained in that set.
//!
//! # Example
//!
//! ```
//! use rolegate_auth::Capability;
//! use rolegate_types::Action;
//!
//! let editor = Capability::READ | Capability::UPDATE;
//! assert!(editor.permits(Action::Update));
//! assert!(!editor.permits(Action::Delete));
//! ```

use bitflags::bitflags;
use rolegate_types::Action;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Actions a role may perform.
    ///
    /// | Capability | Action |
    /// |------------|--------|
    /// | [`READ`](Self::READ) | `read` |
    /// | [`UPDATE`](Self::UPDATE) | `update` |
    /// | [`CREATE`](Self::CREATE) | `create` |
    /// | [`DELETE`](Self::DELETE) | `delete` |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capability: u8 {
        const READ   = 0b0001;
        const UPDATE = 0b0010;
        const CREATE = 0b0100;
        const DELETE = 0b1000;
    }
}

impl Capability {
    /// Every action.
    pub const ALL: Self = Self::READ
        .union(Self::UPDATE)
        .union(Self::CREATE)
        .union(Self::DELETE);

    /// Returns the capability gating `action`.
    #[must_use]
    pub fn for_action(action: Action) -> Self {
        match action {
            Action::Read => Self::READ,
            Action::Update => Self::UPDATE,
            Action::Create => Self::CREATE,
            Action::Delete => Self::DELETE,
        }
    }

    /// Returns `true` if this set allows `action`.
    #[must_use]
    pub fn permits(self, action: Action) -> bool {
        self.contains(Self::for_action(action))
    }

    /// Builds a set from a list of actions.
    #[must_use]
    pub fn from_actions(actions: &[Action]) -> Self {
        actions
            .iter()
            .fold(Self::empty(), |caps, action| caps | Self::for_action(*action))
    }

    /// Returns the actions contained in this set, in [`Action::ALL`] order.
    #[must_use]
    pub fn actions(self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.permits(*action))
            .collect()
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.actions().into_iter().map(Action::as_str).collect();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}
