//! Configuration document model and file store for the relay.
//!
//! This crate defines the declarative configuration tree (stream sections,
//! protocol and codec option maps, opaque engine settings) and the
//! JSON-backed store that loads and saves it.

mod document;
mod error;
mod store;

pub use document::{
    CodecOption, CodecSection, ConfigDocument, ProtocolOption, SettingValue, StreamSection,
};
pub use error::ConfigError;
pub use store::{backup_path, load, save};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
