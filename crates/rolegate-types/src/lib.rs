//! Core value types for rolegate.
//!
//! This crate holds the closed vocabulary every other crate speaks:
//!
//! - [`Role`]: `admin`, `editor`, `viewer`
//! - [`Action`]: `delete`, `update`, `create`, `read`
//! - [`Hour`]: `0..=24`, rendered on a 12-hour clock
//! - [`PermissionRequest`]: the triple evaluated per round
//!
//! plus the [`ErrorCode`] and [`TryNew`] conventions shared by the
//! workspace.
//!
//! # Crate Architecture
//!
//! ```text
//! rolegate-types  (Role, Action, Hour, ErrorCode)  ◄── HERE
//!     ↑
//! rolegate-auth   (Capability, HourWindow, PermissionPolicy, Verdict)
//!     ↑
//! rolegate-runtime (validator, DefaultPolicy, Evaluator, config, io)
//!     ↑
//! rolegate-cli    (binary)
//! ```
//!
//! # Normalization
//!
//! Free-text role/action input is trimmed and lower-cased exactly once,
//! inside [`Role::parse`] / [`Action::parse`]. Everything downstream works
//! with the typed values and echoes their canonical names.
//!
//! # Example
//!
//! ```
//! use rolegate_types::{Action, Hour, PermissionRequest, Role, TryNew};
//!
//! let request = PermissionRequest::new(
//!     Role::parse("Viewer").expect("known role"),
//!     Action::parse("read").expect("known action"),
//!     Hour::try_new(10).expect("in range"),
//! );
//! assert_eq!(request.hour.to_string(), "10 a.m.");
//! ```

mod action;
mod construct;
mod error;
mod hour;
mod request;
mod role;

pub use action::{Action, UnknownAction};
pub use construct::TryNew;
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use hour::{Hour, HourOutOfRange};
pub use request::{normalize, PermissionRequest};
pub use role::{Role, UnknownRole};
