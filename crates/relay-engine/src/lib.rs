//! Media pipeline process runner.
//!
//! This crate turns a resolved settings record into a media engine
//! invocation, spawns the engine as a child process, and reports its
//! lifecycle back to the caller. It does not supervise or restart the
//! process, and it never interprets the media itself.

mod command;
mod error;
mod runner;
mod state;

pub use command::{build_command, PipelineCommand, DEFAULT_PROGRAM};
pub use error::EngineError;
pub use runner::{PipelineMeta, PipelineRunner};
pub use state::{PipelineEvent, PipelineState};

/// Channel capacity for pipeline lifecycle events.
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Interval at which the monitor checks the stop flag, in milliseconds.
pub const STOP_POLL_INTERVAL_MS: u64 = 100;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
