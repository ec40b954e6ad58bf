//! Pipeline state and lifecycle events.

use serde::{Deserialize, Serialize};

/// State of the media pipeline process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum PipelineState {
    /// No pipeline is running.
    #[default]
    Idle,

    /// The process is being spawned.
    Starting,

    /// The process is running.
    Running {
        /// OS process id, when known.
        pid: Option<u32>,
    },

    /// A stop was requested and the process is being terminated.
    Stopping,

    /// The process exited on its own.
    Exited {
        /// Exit code, if the process terminated normally.
        code: Option<i32>,
    },

    /// The pipeline failed to start or monitor.
    Failed {
        /// What went wrong.
        reason: String,
    },
}

impl PipelineState {
    /// Returns true while the process is up.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Returns true from spawn request until the process is gone.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Starting | Self::Running { .. } | Self::Stopping)
    }

    /// Returns true once the process has ended, for whatever reason.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited { .. } | Self::Failed { .. })
    }

    /// Simple string representation of the state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Starting => "Starting",
            Self::Running { .. } => "Running",
            Self::Stopping => "Stopping",
            Self::Exited { .. } => "Exited",
            Self::Failed { .. } => "Failed",
        }
    }

    /// Status message for display.
    pub fn message(&self) -> String {
        match self {
            Self::Idle => "Idle".to_string(),
            Self::Starting => "Starting...".to_string(),
            Self::Running { pid: Some(pid) } => format!("Running (pid {pid})"),
            Self::Running { pid: None } => "Running".to_string(),
            Self::Stopping => "Stopping...".to_string(),
            Self::Exited { code: Some(code) } => format!("Exited with code {code}"),
            Self::Exited { code: None } => "Exited".to_string(),
            Self::Failed { reason } => format!("Failed: {reason}"),
        }
    }
}

/// Lifecycle events delivered to the caller that started the pipeline.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// The process is up.
    Started {
        /// OS process id, when known.
        pid: Option<u32>,
    },

    /// The process ended.
    Exited {
        /// Exit code, if the process terminated normally.
        code: Option<i32>,
    },

    /// The pipeline could not be spawned or monitored.
    Failed {
        /// What went wrong.
        reason: String,
    },
}
