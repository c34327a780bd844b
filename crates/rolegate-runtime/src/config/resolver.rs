//! Configuration resolver trait.
//!
//! # Architecture
//!
//! ```text
//! ConfigResolver.resolve()
//!     │
//!     ├── ConfigLoader.load()   file + env layers
//!     │
//!     └── frontend overrides    CLI flags (highest priority)
//!     ▼
//! RolegateConfig (final)
//! ```
//!
//! The frontend owns its resolver; the runtime only knows the trait.

use super::{ConfigError, ConfigLoader, RolegateConfig};

/// Produces the final, fully layered configuration.
pub trait ConfigResolver {
    /// Resolves configuration from every source this resolver knows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a layer cannot be loaded.
    fn resolve(&self) -> Result<RolegateConfig, ConfigError>;
}

/// A bare loader resolves to its own layers, with no further overrides.
impl ConfigResolver for ConfigLoader {
    fn resolve(&self) -> Result<RolegateConfig, ConfigError> {
        self.load()
    }
}
