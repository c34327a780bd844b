//! Shared E2E test helpers for `rolegate` binary tests.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::Path;
use std::time::Duration;

/// Default timeout for basic CLI tests.
pub const TIMEOUT_BASIC: Duration = Duration::from_secs(10);

/// Environment variables that would leak the developer's setup into a test.
const ROLEGATE_ENV_VARS: &[&str] = &[
    "ROLEGATE_DEBUG",
    "ROLEGATE_VERBOSE",
    "ROLEGATE_HISTORY_FILE",
    "ROLEGATE_LOG_FILE",
    "ROLEGATE_LOG_LEVEL",
    "RUST_LOG",
];

fn strip_env(cmd: &mut assert_cmd::Command) {
    for var in ROLEGATE_ENV_VARS {
        cmd.env_remove(var);
    }
}

/// Build a bare Command without any isolation flags.
pub fn rolegate_cmd_raw() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("rolegate");
    cmd.timeout(TIMEOUT_BASIC);
    strip_env(&mut cmd);
    cmd
}

/// Build a Command isolated in a fresh temp directory.
///
/// The temp dir is the project root; the global config points at a file
/// that does not exist. Returns (command, _guard); keep the guard alive
/// for the test's duration.
pub fn rolegate_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir for project");
    let cmd = rolegate_cmd_in(tmp.path());
    (cmd, tmp)
}

/// Build an isolated Command rooted at an existing directory.
pub fn rolegate_cmd_in(root: &Path) -> assert_cmd::Command {
    let mut cmd = rolegate_cmd_raw();
    cmd.arg("-C")
        .arg(root)
        .arg("--config")
        .arg(root.join("no-global-config.toml"))
        .arg("--history-file")
        .arg(root.join("history"));
    cmd
}

/// Write `<root>/.rolegate/config.toml`.
pub fn write_project_config(root: &Path, content: &str) {
    let dir = root.join(".rolegate");
    std::fs::create_dir_all(&dir).expect("create .rolegate dir");
    std::fs::write(dir.join("config.toml"), content).expect("write project config");
}
