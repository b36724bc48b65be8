//! Configuration errors.

use thiserror::Error;

/// Configuration error raised while reading the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the environment variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
