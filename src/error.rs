//! Library error type
//!
//! The layout pipeline itself cannot fail; errors only come from reading
//! inputs, loading configuration and session operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by taskflow's library API
#[derive(Debug, Error)]
pub enum FlowError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A task or member file is not valid JSON for its schema
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// An input glob pattern could not be parsed
    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// An input glob pattern matched no files
    #[error("no files match {0}")]
    NoInput(String),

    /// A config file is not valid TOML for the settings schema
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A session operation named a node that is not in the layout
    #[error("unknown node: {0}")]
    UnknownNode(String),
}

/// Result alias for taskflow operations
pub type Result<T> = std::result::Result<T, FlowError>;
