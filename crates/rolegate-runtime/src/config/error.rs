//! Configuration errors.

use rolegate_types::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML (includes unknown actions and invalid windows).
    #[error("failed to parse config file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to serialize config.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable '{name}': {message}")]
    InvalidEnvVar { name: String, message: String },
}

impl ConfigError {
    /// Creates a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse TOML error.
    pub fn parse_toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ParseToml {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid env var error.
    pub fn invalid_env_var(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::ReadFile { .. } => "CONFIG_READ_FILE",
            Self::ParseToml { .. } => "CONFIG_PARSE_TOML",
            Self::Serialize(_) => "CONFIG_SERIALIZE",
            Self::InvalidEnvVar { .. } => "CONFIG_INVALID_ENV_VAR",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolegate_types::assert_error_code;

    #[test]
    fn error_display() {
        let err = ConfigError::invalid_env_var("ROLEGATE_DEBUG", "expected bool");
        assert!(err.to_string().contains("ROLEGATE_DEBUG"));
        assert!(err.to_string().contains("expected bool"));
        assert_error_code(&err, "CONFIG_");
    }

    #[test]
    fn read_file_keeps_path() {
        let err = ConfigError::read_file(
            "/etc/rolegate.toml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/etc/rolegate.toml"));
        assert_eq!(err.code(), "CONFIG_READ_FILE");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn serialize_error_converts() {
        let err: ConfigError = toml::to_string(&42_u8)
            .expect_err("a bare integer is not a TOML document")
            .into();
        assert_eq!(err.code(), "CONFIG_SERIALIZE");
        assert!(err.to_string().starts_with("failed to serialize config"));
    }
}
