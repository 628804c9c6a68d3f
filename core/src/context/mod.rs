mod config;
mod error;

pub use config::{MacroConfig, MacroConfigExt};
pub use error::ConfigError;
