//! Console I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐   lines    ┌──────────┐   check()   ┌───────────┐
//! │  LineSource   │ ─────────► │   Repl   │ ──────────► │ Evaluator │
//! │ Editor/Stdin  │            │          │ ◄────────── │           │
//! └───────────────┘            └────┬─────┘   Outcome   └───────────┘
//!                                   │ prompts, messages
//!                                   ▼
//!                              impl io::Write
//! ```
//!
//! # Module Structure
//!
//! - [`input`]: [`LineSource`] and its two implementations
//! - [`parser`]: [`HourParser`] for the hour line
//! - [`driver`]: the [`Repl`] loop and its prompts

pub mod driver;
mod error;
pub mod input;
mod parser;

pub use driver::{
    Repl, SessionSummary, ACTION_PROMPT, HOUR_PROMPT, INVALID_HOUR_MESSAGE, ROLE_PROMPT,
};
pub use error::DriverError;
pub use input::{EditorSource, LineSource, StdinSource};
pub use parser::{HourParseError, HourParser};
