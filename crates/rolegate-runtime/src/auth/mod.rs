//! Runtime permission policy.
//!
//! The [`PermissionPolicy`] trait and its value types live in
//! `rolegate-auth`. This module provides the concrete role table:
//!
//! - [`DefaultPolicy`]: built-in rules, optionally overridden per role
//!   from configuration
//!
//! # Architecture
//!
//! ```text
//! rolegate-auth (trait + data types)
//!     PermissionPolicy, RoleRules, Capability, HourWindow, Verdict
//!         ↓
//! rolegate-runtime/auth (implementation)
//!     DefaultPolicy
//! ```

mod checker;

pub use checker::DefaultPolicy;

pub use rolegate_auth::{AccessDenied, PermissionPolicy, Verdict};
