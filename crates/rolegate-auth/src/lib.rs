//! Permission primitives for rolegate.
//!
//! # Two-Axis Permission Model
//!
//! ```text
//! Effective Permission = Capability(WHAT) ∩ HourWindow(WHEN)
//! ```
//!
//! | Axis | Type | Controls |
//! |------|------|----------|
//! | [`Capability`] | Bitflags | Which actions a role may perform |
//! | [`HourWindow`] | `[start, end)` | At which hours the role may act |
//!
//! Both axes are bundled per role in [`RoleRules`]; a [`PermissionPolicy`]
//! maps each [`Role`](rolegate_types::Role) to its rules and yields a
//! [`Verdict`].
//!
//! # Crate Architecture
//!
//! ```text
//! rolegate-types  (Role, Action, Hour)
//!     ↑
//! rolegate-auth   (Capability, HourWindow, PermissionPolicy)  ◄── THIS CRATE
//!     ↑
//! rolegate-runtime (DefaultPolicy impl, Evaluator)
//! ```
//!
//! # Design Principles
//!
//! - **Trait here, table in the runtime**: the default role table is
//!   configuration-driven and lives in `rolegate-runtime`.
//! - **Exhaustive dispatch**: rules are looked up by a closed `Role`
//!   enum, so a recognised role can never fall through to a generic error.
//! - **Deny wins**: a request must pass both axes.

pub mod capability;
pub mod error;
pub mod policy;
pub mod rules;
pub mod verdict;
pub mod window;

pub use capability::Capability;
pub use error::AccessDenied;
pub use policy::PermissionPolicy;
pub use rules::RoleRules;
pub use verdict::Verdict;
pub use window::{HourWindow, InvalidWindow};
