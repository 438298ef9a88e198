//! Error type for cardform-core.
//!
//! Keystroke handling never fails: malformed input is stripped or truncated.
//! These errors cover the ambient surface only (config loading, generator
//! settings).

/// Errors returned by fallible cardform-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The layered config could not be built or deserialized.
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading or creating the config file failed.
    #[error("config file: {0}")]
    Io(#[from] std::io::Error),

    /// The `[generator]` section holds values the generator cannot use.
    #[error("generator: {0}")]
    Generator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
