//! Console driver errors.

use rolegate_types::ErrorCode;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Fatal error while driving the console.
///
/// End of input and interrupts are not errors; sources report them as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

impl ErrorCode for DriverError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "DRIVER_IO",
            Self::Readline(_) => "DRIVER_READLINE",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
