//! Line sources for the console driver.
//!
//! | Source | Used when | Prompt |
//! |--------|-----------|--------|
//! | [`EditorSource`] | stdin is a terminal | drawn by the line editor |
//! | [`StdinSource`] | input is piped, or in tests | written by the driver |

use super::DriverError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::debug;

/// A source of input lines.
pub trait LineSource {
    /// Reads one line, without its terminator.
    ///
    /// Returns `Ok(None)` at end of input or on interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] on any other read failure.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DriverError>;

    /// Whether the source draws `prompt` itself.
    ///
    /// When `false` the driver writes the prompt to its output sink.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Plain buffered line reader.
///
/// # Example
///
/// ```
/// use rolegate_runtime::io::{LineSource, StdinSource};
///
/// let mut source = StdinSource::new("admin\r\nread\n".as_bytes());
/// assert_eq!(source.read_line("").unwrap().as_deref(), Some("admin"));
/// assert_eq!(source.read_line("").unwrap().as_deref(), Some("read"));
/// assert_eq!(source.read_line("").unwrap(), None);
/// ```
pub struct StdinSource<R> {
    reader: R,
}

impl<R: BufRead> StdinSource<R> {
    /// Wraps any buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl StdinSource<std::io::StdinLock<'static>> {
    /// Reads from the process's standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, DriverError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Interactive line editor with persistent history.
///
/// History is saved after every line, so it survives the process being
/// killed mid-session.
pub struct EditorSource {
    editor: DefaultEditor,
    history_path: PathBuf,
}

impl EditorSource {
    /// Creates the editor and loads history from `history_path`.
    ///
    /// A missing or unreadable history file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Readline`] if the terminal cannot be set up.
    pub fn new(history_path: impl Into<PathBuf>) -> Result<Self, DriverError> {
        let history_path = history_path.into();
        let config = rustyline::Config::builder().auto_add_history(true).build();
        let mut editor = DefaultEditor::with_config(config)?;

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!(path = %parent.display(), error = %e, "Cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!("History load: {e} (expected on first run)");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DriverError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = self.editor.save_history(&self.history_path) {
                    debug!(path = %self.history_path.display(), error = %e, "History save failed");
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("Interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}
