//! rolegate runtime.
//!
//! Everything between raw console text and a printed verdict.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-types : Role, Action, Hour, ErrorCode          │
//! │  rolegate-auth  : Capability, HourWindow, PermissionPolicy│
//! └──────────────────────────────────────────────────────────┘
//!                              ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Runtime Layer (THIS CRATE)               │
//! ├──────────────────────────────────────────────────────────┤
//! │  validation : raw text → ValidatedRequest                │
//! │  auth       : DefaultPolicy (role table)                 │
//! │  evaluator  : validate + decide → Outcome                │
//! │  config     : layered TOML / env configuration           │
//! │  io         : LineSource, HourParser, Repl               │
//! └──────────────────────────────────────────────────────────┘
//!                              ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-cli : the `rolegate` binary                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! ## [`validation`] - Structural Validation
//!
//! - [`validate`]: checks role, action and hour in that order
//! - [`ValidationError`]: the first malformed field, with its user message
//!
//! ## [`auth`] - Role Table
//!
//! - [`DefaultPolicy`]: built-in rules, per-role overridable from config
//!
//! ## [`evaluator`] - One Round
//!
//! - [`Evaluator`]: runs validation then the policy
//! - [`Outcome`]: message and command-mode exit code
//!
//! ## [`config`] - Configuration Management
//!
//! - [`RolegateConfig`](config::RolegateConfig): merged settings
//! - [`ConfigLoader`](config::ConfigLoader): file and env layers
//! - [`ConfigResolver`](config::ConfigResolver): frontend override hook
//!
//! ## [`io`] - Console
//!
//! - [`Repl`](io::Repl): the prompt loop
//! - [`EditorSource`](io::EditorSource) / [`StdinSource`](io::StdinSource)
//!
//! # Example
//!
//! ```
//! use rolegate_runtime::{DefaultPolicy, Evaluator, Outcome};
//!
//! let evaluator = Evaluator::new(DefaultPolicy::new());
//! let outcome = evaluator.check("Admin", "Delete", 3);
//! assert_eq!(outcome.exit_code(), Outcome::EXIT_GRANTED);
//! ```

pub mod auth;
pub mod config;
pub mod evaluator;
pub mod io;
pub mod validation;

pub use auth::DefaultPolicy;
pub use evaluator::{Evaluator, Outcome};
pub use validation::{validate, ValidatedRequest, ValidationError};
