//! Settings resolution and connection-URI construction.
//!
//! This crate walks a configuration document, picks the single enabled
//! option in each of the six categories (input/output protocol and the
//! four codec groups), renders the protocol connection URIs, and
//! assembles the resolved settings record handed to the media engine.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! logging. Visibility into odd selections (none or several enabled
//! entries) is the caller's job; [`Selection`] carries the data for it.

mod error;
mod resolve;
mod select;
mod transport;

pub use error::SettingsError;
pub use resolve::{resolve, ResolvedSettings};
pub use select::{select_enabled, Selection, Toggled};
pub use transport::Transport;

/// Result type for settings resolution.
pub type SettingsResult<T> = Result<T, SettingsError>;
