//! Error types for command execution and probing.

use thiserror::Error;

/// Error type for external command execution.
///
/// Describes what went wrong without dictating recovery strategy.
/// The resolver treats every variant the same way: the probe found nothing.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The argument string could not be split into shell words.
    #[error("Invalid arguments for '{command}': unbalanced quoting in '{args}'")]
    InvalidArguments {
        /// Command the arguments were meant for
        command: String,
        /// The raw argument string
        args: String,
    },

    /// The executable could not be started.
    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        /// Command that failed to start
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("Command '{command}' exited with status {}", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Status {
        /// Command that failed
        command: String,
        /// Exit code, or `None` if terminated by a signal
        code: Option<i32>,
    },
}

/// Error type for a single probe attempt.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe's external tool failed.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The probe's extraction pattern failed to compile.
    #[error("Invalid probe pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// A system call made by the probe failed.
    #[error("System call failed: {0}")]
    Io(#[from] std::io::Error),

    /// The probe cannot run on this host.
    #[error("Probe '{probe}' is not supported on this platform")]
    Unsupported {
        /// Name of the unsupported probe
        probe: &'static str,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}
