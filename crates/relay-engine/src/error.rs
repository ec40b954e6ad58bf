//! Error types for the pipeline runner.

use thiserror::Error;

/// Errors that can occur while driving the media pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No URI was resolved for one side of the relay.
    #[error("No {role} URI resolved; check that a protocol is enabled")]
    MissingUri {
        /// Which side is missing ("input" or "output").
        role: &'static str,
    },

    /// A resolved URI does not parse.
    #[error("Invalid {role} URI: {reason}")]
    InvalidUri {
        /// Which side the URI belongs to.
        role: &'static str,

        /// Parser diagnostic.
        reason: String,
    },

    /// The pipeline is already running.
    #[error("Pipeline already running")]
    AlreadyRunning,

    /// The pipeline is not running.
    #[error("Pipeline not running")]
    NotRunning,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
