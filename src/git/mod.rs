pub mod classify;
pub mod executor;
pub mod message;
pub mod parser;
pub mod repository;
pub mod version;

// Re-export commonly used types
pub use classify::{Classifier, Disposition};
pub use executor::{CommandOutput, ExecOptions, GitExecutor, DEFAULT_TIMEOUT};
pub use message::generate_message;
pub use parser::{
    parse_branches, parse_log, parse_remotes, parse_stashes, parse_status, parse_worktrees,
    BranchEntry, ChangeEntry, ChangeKind, CommitRecord, RemoteEntry, StashEntry, WorktreeEntry,
    LOG_SENTINEL,
};
pub use repository::{
    CherryPickOptions, CloneOptions, CommitOptions, FetchOptions, InitOptions, LogOptions,
    MergeOptions, PullOptions, PushOptions, Repository, RepositoryOptions, ResetMode,
    ResetOptions, RevertOptions, StashPushOptions, TagOptions, WorktreeAddOptions,
};
pub use version::{parse_version, GitVersion};
