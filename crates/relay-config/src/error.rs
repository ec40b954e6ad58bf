//! Error types for the configuration store.

use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not valid JSON for the document model.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// File holds an empty document list.
    #[error("Config file contains no document")]
    EmptyDocument,
}
