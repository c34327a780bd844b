//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use super::{default_config_dir, ConfigError};
use rolegate_auth::{Capability, HourWindow, RoleRules};
use rolegate_types::{Action, Role};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers. Switches
/// are `Option`s so a later layer can turn off what an earlier one
/// turned on; `None` means the layer left the value alone.
///
/// # Example
///
/// ```
/// use rolegate_runtime::config::RolegateConfig;
///
/// let config = RolegateConfig::default();
/// assert!(!config.is_debug());
/// assert!(config.roles.editor.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RolegateConfig {
    /// Enable debug mode (debug-level terminal logging).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// UI configuration.
    pub ui: UiConfig,

    /// Path configuration.
    pub paths: PathsConfig,

    /// File logging configuration.
    pub logging: LoggingConfig,

    /// Role table overrides.
    pub roles: RolesConfig,
}

impl RolegateConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed, names an unknown action,
    /// or carries an invalid hour window.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Whether debug-level terminal logging is on.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if `other`
    /// sets them. This enables layered configuration.
    pub fn merge(&mut self, other: &Self) {
        if other.debug.is_some() {
            self.debug = other.debug;
        }

        self.ui.merge(&other.ui);
        self.paths.merge(&other.paths);
        self.logging.merge(&other.logging);
        self.roles.merge(&other.roles);
    }
}

/// UI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Info-level terminal logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl UiConfig {
    fn merge(&mut self, other: &Self) {
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Readline history file (default: `~/.rolegate/history`).
    pub history_file: Option<PathBuf>,
}

impl PathsConfig {
    fn merge(&mut self, other: &Self) {
        if other.history_file.is_some() {
            self.history_file.clone_from(&other.history_file);
        }
    }

    /// Returns the history file path, falling back to `~/.rolegate/history`.
    #[must_use]
    pub fn history_file_or_default(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| default_config_dir().join("history"))
    }
}

/// File logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a persistent log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<bool>,

    /// Directory holding `rolegate.log` (default: `~/.rolegate/logs`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Level for the file layer (default: `debug`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
}

impl LoggingConfig {
    /// Log file name inside [`resolved_file_path`](Self::resolved_file_path).
    pub const FILE_NAME: &'static str = "rolegate.log";

    /// File layer level when no layer sets one.
    pub const DEFAULT_LEVEL: &'static str = "debug";

    fn merge(&mut self, other: &Self) {
        if other.file.is_some() {
            self.file = other.file;
        }
        if other.file_path.is_some() {
            self.file_path.clone_from(&other.file_path);
        }
        if other.file_level.is_some() {
            self.file_level.clone_from(&other.file_level);
        }
    }

    /// Whether the file layer is installed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.unwrap_or(false)
    }

    #[must_use]
    pub fn level(&self) -> &str {
        self.file_level.as_deref().unwrap_or(Self::DEFAULT_LEVEL)
    }

    /// Returns the log directory, falling back to `~/.rolegate/logs`.
    #[must_use]
    pub fn resolved_file_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| default_config_dir().join("logs"))
    }

    /// Returns the `EnvFilter` directive for the file layer.
    ///
    /// The line editor is held at `warn` regardless of level.
    #[must_use]
    pub fn file_filter_directive(&self) -> String {
        format!("{},rustyline=warn", self.level())
    }
}

/// Role table overrides.
///
/// A present section replaces that role's rules entirely; an absent
/// section keeps the built-in default.
///
/// ```toml
/// [roles.editor]
/// actions = ["read", "update", "create"]
/// window = [7, 22]
///
/// [roles.viewer]
/// actions = ["read"]
/// # no window: any hour
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RolesConfig {
    pub admin: Option<RoleRulesConfig>,
    pub editor: Option<RoleRulesConfig>,
    pub viewer: Option<RoleRulesConfig>,
}

impl RolesConfig {
    fn merge(&mut self, other: &Self) {
        if other.admin.is_some() {
            self.admin.clone_from(&other.admin);
        }
        if other.editor.is_some() {
            self.editor.clone_from(&other.editor);
        }
        if other.viewer.is_some() {
            self.viewer.clone_from(&other.viewer);
        }
    }

    /// Returns the configured override for `role`, if any.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&RoleRulesConfig> {
        match role {
            Role::Admin => self.admin.as_ref(),
            Role::Editor => self.editor.as_ref(),
            Role::Viewer => self.viewer.as_ref(),
        }
    }
}

/// One role's section in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoleRulesConfig {
    /// Allowed actions.
    #[serde(default)]
    pub actions: Vec<Action>,

    /// Permitted `[start, end)` hours; absent means any hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<HourWindow>,
}

impl RoleRulesConfig {
    /// Converts the section into [`RoleRules`].
    #[must_use]
    pub fn to_rules(&self) -> RoleRules {
        RoleRules::new(Capability::from_actions(&self.actions), self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RolegateConfig::default();
        assert!(!config.is_debug());
        assert!(!config.ui.is_verbose());
        assert!(config.paths.history_file.is_none());
        assert!(!config.logging.is_enabled());
        assert_eq!(config.logging.level(), "debug");
        assert_eq!(config.roles, RolesConfig::default());
    }

    #[test]
    fn from_toml_partial() {
        let config = RolegateConfig::from_toml(
            r#"
debug = true

[ui]
verbose = true
"#,
        )
        .expect("valid toml");

        assert!(config.is_debug());
        assert!(config.ui.is_verbose());
        assert!(!config.logging.is_enabled());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn from_toml_roles() {
        let config = RolegateConfig::from_toml(
            r#"
[roles.editor]
actions = ["read", "update", "create"]
window = [7, 22]

[roles.viewer]
actions = ["read"]
"#,
        )
        .expect("valid toml");

        let editor = config.roles.get(Role::Editor).expect("editor section");
        assert_eq!(editor.actions, vec![Action::Read, Action::Update, Action::Create]);
        assert_eq!(editor.window.map(|w| (w.start(), w.end())), Some((7, 22)));

        let viewer = config.roles.get(Role::Viewer).expect("viewer section");
        assert!(viewer.window.is_none());
        assert!(config.roles.get(Role::Admin).is_none());
    }

    #[test]
    fn from_toml_rejects_unknown_action() {
        let err = RolegateConfig::from_toml(
            r#"
[roles.viewer]
actions = ["read", "write"]
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn from_toml_rejects_reversed_window() {
        let err = RolegateConfig::from_toml(
            r#"
[roles.editor]
actions = ["read"]
window = [21, 8]
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn from_toml_rejects_unknown_role_field() {
        let err = RolegateConfig::from_toml(
            r#"
[roles.editor]
actions = ["read"]
hours = [8, 21]
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn to_rules_builds_capabilities() {
        let section = RoleRulesConfig {
            actions: vec![Action::Read, Action::Delete],
            window: Some(HourWindow::VIEWER),
        };
        let rules = section.to_rules();
        assert_eq!(rules.capabilities, Capability::READ | Capability::DELETE);
        assert_eq!(rules.window, Some(HourWindow::VIEWER));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = RolegateConfig::default();
        config.debug = Some(true);
        config.logging.file_level = Some("info".to_string());
        config.roles.editor = Some(RoleRulesConfig {
            actions: vec![Action::Read],
            window: Some(HourWindow::EDITOR),
        });

        let toml = config.to_toml().expect("serialize");
        let parsed = RolegateConfig::from_toml(&toml).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn merge_overrides_non_default() {
        let mut base = RolegateConfig::default();
        base.paths.history_file = Some(PathBuf::from("/base/history"));

        let mut overlay = RolegateConfig::default();
        overlay.debug = Some(true);
        overlay.logging.file_level = Some("trace".to_string());
        overlay.roles.viewer = Some(RoleRulesConfig::default());

        base.merge(&overlay);

        assert!(base.is_debug());
        assert_eq!(base.paths.history_file, Some(PathBuf::from("/base/history")));
        assert_eq!(base.logging.level(), "trace");
        assert_eq!(base.roles.viewer, Some(RoleRulesConfig::default()));
    }

    #[test]
    fn later_layer_can_switch_off() {
        let mut base = RolegateConfig::from_toml(
            r#"
debug = true

[ui]
verbose = true

[logging]
file = true
file_level = "trace"
"#,
        )
        .expect("valid toml");

        let overlay = RolegateConfig::from_toml(
            r#"
debug = false

[ui]
verbose = false

[logging]
file = false
file_level = "debug"
"#,
        )
        .expect("valid toml");

        base.merge(&overlay);

        assert!(!base.is_debug());
        assert!(!base.ui.is_verbose());
        assert!(!base.logging.is_enabled());
        assert_eq!(base.logging.level(), "debug");
    }

    #[test]
    fn unset_overlay_keeps_base() {
        let mut base = RolegateConfig::from_toml("debug = true\n[ui]\nverbose = true\n")
            .expect("valid toml");
        base.merge(&RolegateConfig::default());

        assert!(base.is_debug());
        assert!(base.ui.is_verbose());
    }

    #[test]
    fn history_file_or_default_ends_with_rolegate_history() {
        let path = PathsConfig::default().history_file_or_default();
        assert!(
            path.ends_with(".rolegate/history"),
            "default should end with .rolegate/history, got: {path:?}"
        );
    }

    #[test]
    fn logging_defaults() {
        let logging = LoggingConfig::default();
        assert!(logging.resolved_file_path().ends_with(".rolegate/logs"));
        assert_eq!(logging.file_filter_directive(), "debug,rustyline=warn");
    }
}
