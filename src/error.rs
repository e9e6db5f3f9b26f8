use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while invoking git or interpreting its output
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Failed to launch {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Git exited with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("Git did not exit within {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse git output: {0}")]
    Parse(String),

    #[error("Not a git repository")]
    NotARepository,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;
