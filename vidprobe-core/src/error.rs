use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidprobe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required external dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to start command '{cmd}': {source}")]
    CommandStart {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{cmd}' failed with status {status}: {stderr}")]
    CommandFailed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse JSON output: {0}")]
    JsonParse(String),

    #[error("Failed to parse ffprobe field: {0}")]
    FfprobeParse(String),

    #[error("Required field '{0}' missing from ffprobe output")]
    MissingField(&'static str),

    #[error("No video stream found in {}", .0.display())]
    NoVideoStream(PathBuf),
}

/// Result type for vidprobe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, source: std::io::Error) -> CoreError {
    CoreError::CommandStart {
        cmd: cmd.into(),
        source,
    }
}

/// Creates a `CommandFailed` error from a non-zero exit status.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        cmd: cmd.into(),
        status,
        stderr: stderr.into(),
    }
}
