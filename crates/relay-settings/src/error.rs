//! Error types for settings resolution.

use thiserror::Error;

/// Errors that can occur while resolving settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A known protocol entry lacks one of its required URI fields.
    #[error("Protocol '{protocol}' is missing required field '{field}'")]
    MissingField {
        /// Protocol the entry is stored under.
        protocol: &'static str,

        /// The absent field key.
        field: &'static str,
    },
}
