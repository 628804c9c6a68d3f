//! Tool configuration
//!
//! This module re-exports the shared config type from craftmac-types and
//! provides persistence for it.

// Re-export the shared type
pub use craftmac_types::MacroConfig;

use super::error::ConfigError;

/// Extension trait for MacroConfig persistence
pub trait MacroConfigExt {
    fn load() -> Self;
    fn store(self) -> Result<(), ConfigError>;
}

impl MacroConfigExt for MacroConfig {
    /// Load the persisted configuration, falling back to defaults when no
    /// config file exists or it fails to parse.
    fn load() -> Self {
        confy::load("craftmac", "config").unwrap_or_default()
    }

    fn store(self) -> Result<(), ConfigError> {
        confy::store("craftmac", "config", self).map_err(ConfigError::Save)
    }
}
