pub mod audit;
pub mod config;
pub mod error;
pub mod git;

// Re-export commonly used types for convenience
pub use error::{GitError, GitResult};
pub use git::{
    ChangeEntry, ChangeKind, CommandOutput, CommitRecord, ExecOptions, GitExecutor, GitVersion,
    Repository, RepositoryOptions,
};
