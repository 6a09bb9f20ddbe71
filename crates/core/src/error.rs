//! Error types for lexis
//!
//! The text pipeline and the scoring arithmetic are total and never fail.
//! Errors only surface at construction and configuration boundaries.

use thiserror::Error;

/// Lexis error type
#[derive(Error, Debug)]
pub enum LexisError {
    /// A ranker was requested over zero documents
    #[error("cannot rank an empty corpus")]
    EmptyCorpus,

    /// A configuration value lies outside its valid domain
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },

    /// Configuration text could not be parsed
    #[error("config parse error: {0}")]
    Config(String),

    /// IO error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lexis operations
pub type LexisResult<T> = std::result::Result<T, LexisError>;

impl From<toml::de::Error> for LexisError {
    fn from(err: toml::de::Error) -> Self {
        LexisError::Config(err.to_string())
    }
}
