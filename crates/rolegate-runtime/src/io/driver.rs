//! Interactive prompt loop.
//!
//! # State Machine
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            ▼                              │ message printed
//!   AwaitingInput ──role, action, hour──► Evaluating
//!            │
//!            └── end of input / interrupt ──► done
//! ```
//!
//! There is no exit command. A non-integer hour prints
//! [`INVALID_HOUR_MESSAGE`] and starts the next round.

use super::{DriverError, HourParser, LineSource};
use crate::evaluator::{Evaluator, Outcome};
use rolegate_auth::PermissionPolicy;
use std::io::Write;
use tracing::{debug, info};

pub const ROLE_PROMPT: &str = "Que rol posee: ";
pub const ACTION_PROMPT: &str = "Que accion tiene: ";
pub const HOUR_PROMPT: &str = "Que horas es: ";

/// Shown when the hour line is not an integer.
pub const INVALID_HOUR_MESSAGE: &str = "Error! No ha insertado un valor valido. Intentelo de nuevo";

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub granted: usize,
    pub denied: usize,
    /// Rounds rejected by structural validation.
    pub invalid: usize,
    /// Rounds whose hour was not an integer.
    pub unparsable: usize,
}

impl SessionSummary {
    /// Total completed rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.granted + self.denied + self.invalid + self.unparsable
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome.exit_code() {
            Outcome::EXIT_GRANTED => self.granted += 1,
            Outcome::EXIT_DENIED => self.denied += 1,
            _ => self.invalid += 1,
        }
    }
}

/// Drives [`Evaluator`] rounds from a [`LineSource`] into a writer.
///
/// # Example
///
/// ```
/// use rolegate_runtime::io::{Repl, StdinSource};
/// use rolegate_runtime::{DefaultPolicy, Evaluator};
///
/// let evaluator = Evaluator::new(DefaultPolicy::new());
/// let source = StdinSource::new("editor\ndelete\n10\n".as_bytes());
/// let mut out = Vec::new();
///
/// let summary = Repl::new(&evaluator, source, &mut out).run().unwrap();
/// assert_eq!(summary.denied, 1);
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("editor no posee el permiso delete"));
/// ```
pub struct Repl<'a, P, S, W> {
    evaluator: &'a Evaluator<P>,
    source: S,
    sink: W,
}

impl<'a, P, S, W> Repl<'a, P, S, W>
where
    P: PermissionPolicy,
    S: LineSource,
    W: Write,
{
    pub fn new(evaluator: &'a Evaluator<P>, source: S, sink: W) -> Self {
        Self {
            evaluator,
            source,
            sink,
        }
    }

    /// Runs rounds until the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if reading or writing fails.
    pub fn run(&mut self) -> Result<SessionSummary, DriverError> {
        let mut summary = SessionSummary::default();
        info!("Interactive mode started");

        while let Some(round) = self.round()? {
            match round {
                Round::Unparsable => summary.unparsable += 1,
                Round::Evaluated(outcome) => summary.record(&outcome),
            }
        }

        info!(
            rounds = summary.rounds(),
            granted = summary.granted,
            denied = summary.denied,
            "Input closed"
        );
        Ok(summary)
    }

    /// One prompt cycle; `None` once input ends.
    fn round(&mut self) -> Result<Option<Round>, DriverError> {
        let Some(role) = self.prompt(ROLE_PROMPT)? else {
            return Ok(None);
        };
        let Some(action) = self.prompt(ACTION_PROMPT)? else {
            return Ok(None);
        };
        let Some(hour) = self.prompt(HOUR_PROMPT)? else {
            return Ok(None);
        };

        let hour = match HourParser::parse(&hour) {
            Ok(hour) => hour,
            Err(e) => {
                debug!(error = %e, "Hour not an integer");
                writeln!(self.sink, "{INVALID_HOUR_MESSAGE}")?;
                self.sink.flush()?;
                return Ok(Some(Round::Unparsable));
            }
        };

        let outcome = self.evaluator.check(&role, &action, hour);
        writeln!(self.sink, "{}\n", outcome.message())?;
        self.sink.flush()?;
        Ok(Some(Round::Evaluated(outcome)))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, DriverError> {
        if !self.source.shows_prompt() {
            write!(self.sink, "{prompt}")?;
            self.sink.flush()?;
        }
        self.source.read_line(prompt)
    }
}

enum Round {
    Unparsable,
    Evaluated(Outcome),
}
