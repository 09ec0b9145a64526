//! Typed errors for configuration loading
//!
//! Action derivation itself cannot fail: unknown verbs are dropped and odd
//! resource names degrade to odd identifiers. The YAML configuration
//! loader is the one fallible surface.

use thiserror::Error;

/// Result type alias for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a router configuration
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading a configuration file
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
