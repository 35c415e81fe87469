//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

// Re-export library error type
pub use r53q_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A config file exists but cannot be read or decoded
    #[error("cannot read config {}: {detail}", .path.display())]
    ConfigRead { path: PathBuf, detail: String },

    /// No config source was found; a placeholder was written at `path`
    #[error(
        "no config found; created {} with empty values, please populate credentials",
        .path.display()
    )]
    ConfigMissing { path: PathBuf },

    /// No config source was found and `path` already held a file outside the
    /// search order
    #[error(
        "no config found; {} exists but is not searched, move it next to the executable or into ~/.config",
        .path.display()
    )]
    ConfigNotSearched { path: PathBuf },

    /// A config was found but lacks an access key or secret key
    #[error("config from {origin} has an empty access_key or secret_key")]
    IncompleteConfig { origin: String },

    /// The placeholder config could not be written
    #[error("cannot create config {}: {detail}", .path.display())]
    ConfigWrite { path: PathBuf, detail: String },

    /// The identifier matched no hosted zone
    #[error("no hosted zone found for {0:?}")]
    ZoneNotFound(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether the error is caused by user input or local setup rather than by
    /// the provider or the network. Used to pick the log level.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigRead { .. }
            | Self::ConfigMissing { .. }
            | Self::ConfigNotSearched { .. }
            | Self::IncompleteConfig { .. }
            | Self::ZoneNotFound(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::ConfigWrite { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
