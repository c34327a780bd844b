//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌─────────────────────────────────────────────┐
//! │  1. CLI flags (via ConfigResolver)          │  Invocation override
//! ├─────────────────────────────────────────────┤
//! │  2. Environment Variables (ROLEGATE_*)      │  Runtime override
//! ├─────────────────────────────────────────────┤
//! │  3. Project Config (.rolegate/config.toml)  │  Project-specific
//! ├─────────────────────────────────────────────┤
//! │  4. Global Config (~/.rolegate/config.toml) │  User defaults
//! ├─────────────────────────────────────────────┤
//! │  5. Default Values (compile-time)           │  Fallback
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Directory Structure
//!
//! ```text
//! ~/.rolegate/
//! ├── config.toml      # Global configuration
//! ├── history          # Line editor history
//! └── logs/
//!     └── rolegate.log # Persistent log (when enabled)
//!
//! <project>/.rolegate/
//! └── config.toml      # Project configuration (overrides global)
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `ROLEGATE_DEBUG` | `debug` | bool |
//! | `ROLEGATE_VERBOSE` | `ui.verbose` | bool |
//! | `ROLEGATE_HISTORY_FILE` | `paths.history_file` | PathBuf |
//! | `ROLEGATE_LOG_FILE` | `logging.file_path` (enables `logging.file`) | PathBuf |
//! | `ROLEGATE_LOG_LEVEL` | `logging.file_level` | String |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.rolegate/config.toml
//! debug = false
//!
//! [ui]
//! verbose = false
//!
//! [paths]
//! history_file = "/home/alice/.rolegate/history"
//!
//! [logging]
//! file = true
//! file_level = "info"
//!
//! # Replaces the built-in editor rules.
//! [roles.editor]
//! actions = ["read", "update", "create"]
//! window = [7, 22]
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::ConfigResolver;
pub use types::{
    LoggingConfig, PathsConfig, RoleRulesConfig, RolegateConfig, RolesConfig, UiConfig,
};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".rolegate")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".rolegate";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
