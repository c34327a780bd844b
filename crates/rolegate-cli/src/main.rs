//! rolegate CLI - role, action and hour permission checks
//!
//! # Modes
//!
//! - Interactive (no arguments): prompts for role, action and hour in a
//!   loop until end of input (Ctrl-D) or Ctrl-C.
//! - Command (`rolegate <ROLE> <ACTION> <HOUR>`): checks one request and
//!   exits with 0 (granted), 1 (invalid input) or 2 (denied).
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ROLEGATE_*`)
//! 3. Project config (`.rolegate/config.toml` under `--project`, default cwd)
//! 4. Global config (`~/.rolegate/config.toml`, or `--config`)
//! 5. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `ROLEGATE_DEBUG`: Enable debug logging (`true`/`false`)
//! - `ROLEGATE_VERBOSE`: Enable info logging
//! - `ROLEGATE_HISTORY_FILE`: Line editor history file
//! - `ROLEGATE_LOG_FILE`: Log directory (enables file logging)
//! - `ROLEGATE_LOG_LEVEL`: File log level

mod tracing_writer;

use anyhow::{Context, Result};
use clap::Parser;
use rolegate_auth::PermissionPolicy;
use rolegate_runtime::config::{ConfigError, ConfigLoader, ConfigResolver, LoggingConfig, RolegateConfig};
use rolegate_runtime::io::{EditorSource, HourParser, Repl, StdinSource, INVALID_HOUR_MESSAGE};
use rolegate_runtime::{DefaultPolicy, Evaluator, Outcome};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// rolegate - check whether a role may perform an action at a given hour
#[derive(Parser, Debug)]
#[command(name = "rolegate")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long)]
    project: Option<PathBuf>,

    /// Global config file (default: ~/.rolegate/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Line editor history file (also: ROLEGATE_HISTORY_FILE)
    #[arg(long, value_name = "FILE")]
    history_file: Option<PathBuf>,

    /// Write rolegate.log into this directory (also: ROLEGATE_LOG_FILE)
    #[arg(long, value_name = "DIR")]
    log_file: Option<PathBuf>,

    /// Override file log level (also: ROLEGATE_LOG_LEVEL, default: debug)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Role to check (command mode)
    #[arg(requires_all = ["action", "hour"])]
    role: Option<String>,

    /// Action to check (command mode)
    #[arg(requires_all = ["role", "hour"])]
    action: Option<String>,

    /// Hour 0-24 (command mode)
    #[arg(requires_all = ["role", "action"])]
    hour: Option<String>,
}

impl Args {
    /// The command-mode triple, if one was given.
    fn request(&self) -> Option<(&str, &str, &str)> {
        match (&self.role, &self.action, &self.hour) {
            (Some(role), Some(action), Some(hour)) => Some((role, action, hour)),
            _ => None,
        }
    }
}

/// CLI-based configuration resolver.
///
/// Merges file/env config via [`ConfigLoader`] and applies CLI argument
/// overrides as the highest-priority layer.
struct CliConfigResolver {
    project_root: PathBuf,
    global_config: Option<PathBuf>,
    /// Read the `ROLEGATE_*` layer.
    read_env: bool,
    debug: bool,
    verbose: bool,
    history_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl CliConfigResolver {
    fn from_args(args: &Args) -> Self {
        let project_root = args.project.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to get current directory, using '.'");
                PathBuf::from(".")
            })
        });

        Self {
            project_root,
            global_config: args.config.clone(),
            read_env: true,
            debug: args.debug,
            verbose: args.verbose,
            history_file: args.history_file.clone(),
            log_file: args.log_file.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

impl ConfigResolver for CliConfigResolver {
    fn resolve(&self) -> Result<RolegateConfig, ConfigError> {
        let mut loader = ConfigLoader::new().with_project_root(&self.project_root);
        if let Some(ref path) = self.global_config {
            loader = loader.with_global_config(path);
        }
        if !self.read_env {
            loader = loader.skip_env_vars();
        }

        let mut config = loader.load()?;

        // CLI args override (highest priority)
        if self.debug {
            config.debug = Some(true);
        }
        if self.verbose {
            config.ui.verbose = Some(true);
        }
        if let Some(ref p) = self.history_file {
            config.paths.history_file = Some(p.clone());
        }
        if let Some(ref p) = self.log_file {
            config.logging.file = Some(true);
            config.logging.file_path = Some(p.clone());
        }
        if let Some(ref level) = self.log_level {
            config.logging.file_level = Some(level.clone());
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let resolver = CliConfigResolver::from_args(&args);

    let config = resolver.resolve().context("Config error")?;

    init_tracing(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "rolegate starting");
    info!(path = %resolver.project_root.display(), "Project root");

    let evaluator = Evaluator::new(DefaultPolicy::from_config(&config.roles));

    if let Some((role, action, hour)) = args.request() {
        info!(role, action, hour, "Command mode");
        let code = run_command(&evaluator, role, action, hour, &mut std::io::stdout())?;
        if code != Outcome::EXIT_GRANTED {
            std::process::exit(code);
        }
        return Ok(());
    }

    let summary = if std::io::stdin().is_terminal() {
        let source = EditorSource::new(config.paths.history_file_or_default())
            .context("Failed to start line editor")?;
        Repl::new(&evaluator, source, std::io::stdout()).run()?
    } else {
        Repl::new(&evaluator, StdinSource::stdin(), std::io::stdout()).run()?
    };

    info!(rounds = summary.rounds(), "Session ended");
    Ok(())
}

/// Checks one request and prints its message.
///
/// Returns the process exit code.
fn run_command<P: PermissionPolicy>(
    evaluator: &Evaluator<P>,
    role: &str,
    action: &str,
    hour: &str,
    out: &mut impl Write,
) -> std::io::Result<i32> {
    let code = match HourParser::parse(hour) {
        Ok(hour) => {
            let outcome = evaluator.check(role, action, hour);
            writeln!(out, "{}", outcome.message())?;
            outcome.exit_code()
        }
        Err(_) => {
            writeln!(out, "{INVALID_HOUR_MESSAGE}")?;
            Outcome::EXIT_INVALID
        }
    };
    out.flush()?;
    Ok(code)
}

/// Installs the terminal layer and, when enabled, the file layer.
///
/// Terminal filter: debug > verbose > `RUST_LOG` > `warn`, written to
/// stderr so stdout carries only prompts and verdicts.
/// File filter: `logging.file_level` (default `debug`), independent.
fn init_tracing(config: &RolegateConfig) {
    let terminal_filter = if config.is_debug() {
        EnvFilter::new("debug,rustyline=warn")
    } else if config.ui.is_verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let terminal_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let log_file = if config.logging.is_enabled() {
        open_log_file(&config.logging.resolved_file_path())
    } else {
        None
    };

    if let Some(file) = log_file {
        let file_filter = EnvFilter::new(config.logging.file_filter_directive());
        let file_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(tracing_writer::FileMakeWriter::new(file));

        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .with(file_layer.with_filter(file_filter))
            .init();

        info!(
            path = %config.logging.resolved_file_path().join(LoggingConfig::FILE_NAME).display(),
            level = config.logging.level(),
            "File logging enabled"
        );
    } else {
        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .init();
    }
}

/// Opens the persistent log file in the given directory.
///
/// Creates `<log_dir>/rolegate.log` in append mode.
/// Returns `None` if the directory/file cannot be created (non-fatal).
fn open_log_file(log_dir: &std::path::Path) -> Option<Arc<parking_lot::Mutex<std::fs::File>>> {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!(
            "Warning: cannot create log directory {}: {e}",
            log_dir.display()
        );
        return None;
    }

    let log_path = log_dir.join(LoggingConfig::FILE_NAME);

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => Some(Arc::new(parking_lot::Mutex::new(file))),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", log_path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Helper: a resolver isolated from the user's real config files
    /// and `ROLEGATE_*` environment.
    fn resolver_with(debug: bool, verbose: bool) -> (TempDir, CliConfigResolver) {
        let tmp = TempDir::new().expect("should create temp dir for test");
        let resolver = CliConfigResolver {
            project_root: tmp.path().to_path_buf(),
            global_config: Some(tmp.path().join("no-global.toml")),
            read_env: false,
            debug,
            verbose,
            history_file: None,
            log_file: None,
            log_level: None,
        };
        (tmp, resolver)
    }

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rolegate").chain(extra.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn resolve_defaults_no_overrides() {
        let (_tmp, resolver) = resolver_with(false, false);
        let config = resolver.resolve().expect("resolve should succeed");

        assert_eq!(config, RolegateConfig::default());
        assert!(!config.is_debug());
        assert!(!config.ui.is_verbose());
        assert!(!config.logging.is_enabled());
    }

    #[test]
    fn resolve_debug_and_verbose_overrides() {
        let (_tmp, resolver) = resolver_with(true, true);
        let config = resolver.resolve().expect("resolve should succeed");

        assert!(config.is_debug());
        assert!(config.ui.is_verbose());
    }

    #[test]
    fn false_flags_preserve_file_values() {
        let (tmp, mut resolver) = resolver_with(false, false);
        let global = tmp.path().join("global.toml");
        std::fs::write(&global, "debug = true\n").expect("write global config");
        resolver.global_config = Some(global);

        let config = resolver.resolve().expect("resolve should succeed");
        assert!(config.is_debug(), "CLI default false must not clobber file value");
    }

    #[test]
    fn resolve_log_file_enables_file_logging() {
        let (_tmp, mut resolver) = resolver_with(false, false);
        resolver.log_file = Some(PathBuf::from("/custom/logs"));
        resolver.log_level = Some("trace".into());

        let config = resolver.resolve().expect("resolve should succeed");
        assert!(config.logging.is_enabled());
        assert_eq!(config.logging.file_path, Some(PathBuf::from("/custom/logs")));
        assert_eq!(config.logging.level(), "trace");
    }

    #[test]
    fn cli_flag_overrides_file_switch_off() {
        let (tmp, mut resolver) = resolver_with(true, false);
        let global = tmp.path().join("global.toml");
        std::fs::write(&global, "debug = false\n").expect("write global config");
        resolver.global_config = Some(global);

        let config = resolver.resolve().expect("resolve should succeed");
        assert!(config.is_debug());
    }

    #[test]
    fn resolve_history_file_override() {
        let (_tmp, mut resolver) = resolver_with(false, false);
        resolver.history_file = Some(PathBuf::from("/custom/history"));

        let config = resolver.resolve().expect("resolve should succeed");
        assert_eq!(
            config.paths.history_file_or_default(),
            PathBuf::from("/custom/history")
        );
    }

    #[test]
    fn resolve_project_roles() {
        let (tmp, resolver) = resolver_with(false, false);
        let dir = tmp.path().join(".rolegate");
        std::fs::create_dir_all(&dir).expect("create .rolegate");
        std::fs::write(
            dir.join("config.toml"),
            "[roles.viewer]\nactions = [\"read\", \"update\"]\n",
        )
        .expect("write project config");

        let config = resolver.resolve().expect("resolve should succeed");
        assert!(config.roles.viewer.is_some());
    }

    #[test]
    fn resolve_rejects_bad_project_config() {
        let (tmp, resolver) = resolver_with(false, false);
        let dir = tmp.path().join(".rolegate");
        std::fs::create_dir_all(&dir).expect("create .rolegate");
        std::fs::write(dir.join("config.toml"), "[roles.viewer]\nactions = [\"fly\"]\n")
            .expect("write project config");

        assert!(matches!(
            resolver.resolve(),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn from_args_defaults() {
        let args = args(&[]);
        let resolver = CliConfigResolver::from_args(&args);

        assert!(!resolver.debug);
        assert!(!resolver.verbose);
        assert!(resolver.read_env);
        assert!(resolver.global_config.is_none());
        assert!(args.request().is_none());
        // project defaults to cwd
        assert!(resolver.project_root.exists());
    }

    #[test]
    fn from_args_with_all_flags() {
        let args = args(&[
            "-d",
            "-v",
            "-C",
            "/tmp",
            "--config",
            "/etc/rolegate.toml",
            "--history-file",
            "/h",
            "--log-file",
            "/custom/logs",
            "--log-level",
            "trace",
        ]);
        let resolver = CliConfigResolver::from_args(&args);

        assert!(resolver.debug);
        assert!(resolver.verbose);
        assert_eq!(resolver.project_root, PathBuf::from("/tmp"));
        assert_eq!(resolver.global_config, Some(PathBuf::from("/etc/rolegate.toml")));
        assert_eq!(resolver.history_file, Some(PathBuf::from("/h")));
        assert_eq!(resolver.log_file, Some(PathBuf::from("/custom/logs")));
        assert_eq!(resolver.log_level, Some("trace".into()));
    }

    #[test]
    fn positional_triple_is_command_mode() {
        let args = args(&["editor", "update", "9"]);
        assert_eq!(args.request(), Some(("editor", "update", "9")));
    }

    #[test]
    fn negative_hour_is_positional() {
        let args = args(&["admin", "read", "-1"]);
        assert_eq!(args.request(), Some(("admin", "read", "-1")));
    }

    #[test]
    fn partial_triple_is_usage_error() {
        assert!(Args::try_parse_from(["rolegate", "admin"]).is_err());
        assert!(Args::try_parse_from(["rolegate", "admin", "read"]).is_err());
        assert!(Args::try_parse_from(["rolegate", "a", "b", "1", "extra"]).is_err());
    }

    #[test]
    fn run_command_exit_codes() {
        let evaluator = Evaluator::new(DefaultPolicy::new());
        let cases = [
            ("admin", "delete", "3", Outcome::EXIT_GRANTED),
            ("admin", "read", "14", Outcome::EXIT_GRANTED),
            ("viewer", "read", "19", Outcome::EXIT_DENIED),
            ("editor", "update", "22", Outcome::EXIT_DENIED),
            ("viewer", "update", "10", Outcome::EXIT_DENIED),
            ("editor", "delete", "10", Outcome::EXIT_DENIED),
            ("viewer", "read", "20", Outcome::EXIT_DENIED),
            ("guest", "read", "10", Outcome::EXIT_INVALID),
            ("admin", "read", "25", Outcome::EXIT_INVALID),
            ("admin", "read", "abc", Outcome::EXIT_INVALID),
        ];

        for (role, action, hour, expected) in cases {
            let mut out = Vec::new();
            let code = run_command(&evaluator, role, action, hour, &mut out).unwrap();
            assert_eq!(code, expected, "{role} {action} {hour}");
            assert!(String::from_utf8(out).unwrap().ends_with('\n'));
        }
    }

    #[test]
    fn run_command_non_integer_hour_message() {
        let evaluator = Evaluator::new(DefaultPolicy::new());
        let mut out = Vec::new();
        run_command(&evaluator, "admin", "read", "noon", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{INVALID_HOUR_MESSAGE}\n")
        );
    }

    #[test]
    fn open_log_file_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        assert!(open_log_file(&dir).is_some());
        assert!(dir.join(LoggingConfig::FILE_NAME).exists());
    }
}
