use crate::audit::logger::CommandLogger;
use crate::error::{GitError, GitResult};
use crate::git::classify::{Classifier, Disposition};
use crate::git::executor::{CommandOutput, ExecOptions, GitExecutor, DEFAULT_TIMEOUT};
use crate::git::message;
use crate::git::parser::{
    self, BranchEntry, ChangeEntry, ChangeKind, CommitRecord, RemoteEntry, StashEntry,
    WorktreeEntry, LOG_SENTINEL,
};
use crate::git::version;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Benign-pattern tables, one per operation family. The same message can be
// an expected answer for one command and a real failure for another, so
// these are never merged.
const OBJECT_LOOKUP_BENIGN: Classifier = Classifier::new(&[
    "Not a valid object name",
    "unknown revision",
    "bad revision",
    "bad object",
    "does not exist",
])
.benign_on_silent();

const PATH_LOOKUP_BENIGN: Classifier = Classifier::new(&[
    "does not exist",
    "exists on disk, but not in",
    "invalid object name",
    "unknown revision",
    "bad revision",
]);

const REPO_DETECT_BENIGN: Classifier = Classifier::new(&["not a git repository"]);

const CONFIG_GET_BENIGN: Classifier = Classifier::new(&[]).benign_on_silent();

const UNBORN_HEAD_BENIGN: Classifier = Classifier::new(&[
    "unknown revision",
    "ambiguous argument",
    "does not have any commits",
    "bad revision",
]);

/// Construction-time configuration for a Repository
#[derive(Debug, Clone)]
pub struct RepositoryOptions {
    /// Git executable name or path
    pub git_bin: String,
    /// Default per-call timeout
    pub timeout: Duration,
    /// Base environment for spawned processes; None snapshots the current
    /// process environment once, at construction
    pub env: Option<HashMap<String, String>>,
    /// Log every executed command
    pub debug: bool,
    /// Where the debug log goes; None uses the default location
    pub log_path: Option<PathBuf>,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            git_bin: "git".to_string(),
            timeout: DEFAULT_TIMEOUT,
            env: None,
            debug: false,
            log_path: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub bare: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    pub bare: bool,
    pub depth: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Also stage modified and deleted tracked files
    pub all: bool,
    pub allow_empty: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub rebase: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub force: bool,
    pub set_upstream: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub remote: Option<String>,
    pub all: bool,
    pub prune: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    pub no_ff: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TagOptions {
    /// Present message makes the tag annotated
    pub message: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetMode {
    Soft,
    #[default]
    Mixed,
    Hard,
}

#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    pub mode: ResetMode,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RevertOptions {
    pub no_commit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CherryPickOptions {
    pub no_commit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StashPushOptions {
    pub message: Option<String>,
    pub include_untracked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub max_count: Option<usize>,
    pub skip: Option<usize>,
    /// Restrict history to one path
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WorktreeAddOptions {
    /// Create this branch for the new worktree
    pub branch: Option<String>,
    pub detach: bool,
}

/// Represents a git repository and provides the full operation set
///
/// Holds only immutable configuration; each operation spawns its own
/// subprocess, so concurrent calls share nothing mutable.
pub struct Repository {
    path: PathBuf,
    executor: GitExecutor,
    timeout: Duration,
    debug: bool,
    logger: Option<CommandLogger>,
}

impl Repository {
    /// Create a Repository for a known git directory
    pub fn new<P: AsRef<Path>>(path: P) -> GitResult<Self> {
        Self::with_options(path, RepositoryOptions::default())
    }

    /// Create a Repository with explicit configuration
    pub fn with_options<P: AsRef<Path>>(path: P, options: RepositoryOptions) -> GitResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.as_os_str().is_empty() {
            return Err(GitError::Usage("repository path is required".to_string()));
        }

        let base_env = options
            .env
            .unwrap_or_else(|| std::env::vars().collect());
        let executor = GitExecutor::with_environment(&path, options.git_bin, base_env);

        let logger = if options.debug {
            Some(match options.log_path {
                Some(log_path) => CommandLogger::with_path(log_path)?,
                None => CommandLogger::new()?,
            })
        } else {
            None
        };

        Ok(Self {
            path,
            executor,
            timeout: options.timeout,
            debug: options.debug,
            logger,
        })
    }

    /// Detect a git repository from the current working directory
    pub fn discover() -> GitResult<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Detect a git repository starting from a specific directory
    pub fn discover_from<P: AsRef<Path>>(start_path: P) -> GitResult<Self> {
        let mut current = start_path.as_ref().to_path_buf();

        loop {
            if current.join(".git").exists() {
                return Self::new(current);
            }

            if !current.pop() {
                return Err(GitError::NotARepository);
            }
        }
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether command logging is enabled
    pub fn debug(&self) -> bool {
        self.debug
    }

    fn exec_options(&self, check: bool) -> ExecOptions {
        ExecOptions {
            timeout: self.timeout,
            check,
            ..ExecOptions::default()
        }
    }

    async fn exec<S: AsRef<OsStr>>(
        &self,
        args: &[S],
        options: &ExecOptions,
    ) -> GitResult<CommandOutput> {
        let result = self.executor.execute(args, options).await;

        if let Some(logger) = &self.logger {
            let command = args
                .iter()
                .map(|a| a.as_ref().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            let exit_code = match &result {
                Ok(output) => output.exit_code,
                Err(GitError::CommandFailed { code, .. }) => *code,
                Err(_) => -1,
            };
            // Diagnosis must never alter control flow
            let _ = logger.log_command(&command, &self.path, exit_code);
        }

        result
    }

    /// Run a command; a non-zero exit is an error
    async fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> GitResult<CommandOutput> {
        self.exec(args, &self.exec_options(true)).await
    }

    /// Run a command and classify a non-zero exit against the operation's
    /// benign table: Some(output) on success, None on an expected negative
    async fn run_classified<S: AsRef<OsStr>>(
        &self,
        args: &[S],
        classifier: &Classifier,
    ) -> GitResult<Option<CommandOutput>> {
        let output = self.exec(args, &self.exec_options(false)).await?;
        if output.success {
            return Ok(Some(output));
        }

        match classifier.classify(&output) {
            Disposition::Benign => Ok(None),
            Disposition::Operational => Err(GitError::CommandFailed {
                code: output.exit_code,
                stderr: output.stderr,
            }),
        }
    }

    /// Initialize a repository at the configured path
    pub async fn init(&self, options: &InitOptions) -> GitResult<()> {
        let mut args = vec!["init".to_string()];
        if options.bare {
            args.push("--bare".to_string());
        }
        self.run(&args).await?;
        Ok(())
    }

    /// Clone a repository into the target path
    ///
    /// Runs from the parent of the target so git can create the directory.
    pub async fn clone(&self, url: &str, target: &Path, options: &CloneOptions) -> GitResult<()> {
        let args = build_clone_args(url, target, options);
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let exec_options = self.exec_options(true).in_dir(parent);
        self.exec(&args, &exec_options).await?;
        Ok(())
    }

    /// List pending changes in the working tree
    pub async fn status(&self) -> GitResult<Vec<ChangeEntry>> {
        let output = self.run(&["status", "--porcelain"]).await?;
        Ok(parser::parse_status(&output.stdout))
    }

    /// Stage the given paths, or everything when none are given
    pub async fn stage(&self, paths: &[&str]) -> GitResult<()> {
        let mut args = vec!["add".to_string()];
        if paths.is_empty() {
            args.push("-A".to_string());
        } else {
            args.push("--".to_string());
            args.extend(paths.iter().map(|p| p.to_string()));
        }
        self.run(&args).await?;
        Ok(())
    }

    /// Record a commit
    ///
    /// An empty or whitespace-only message is replaced by one derived from
    /// the pending change list.
    pub async fn commit(&self, message: &str, options: &CommitOptions) -> GitResult<()> {
        let message = if message.trim().is_empty() {
            let changes = self.status().await?;
            message::generate_message(&changes)
        } else {
            message.to_string()
        };

        let args = build_commit_args(&message, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Create a branch without switching to it
    pub async fn create_branch(&self, name: &str) -> GitResult<()> {
        self.run(&["branch", name]).await?;
        Ok(())
    }

    /// Switch the working tree to a branch
    pub async fn switch_branch(&self, name: &str) -> GitResult<()> {
        self.run(&["checkout", name]).await?;
        Ok(())
    }

    /// Pull from a remote
    pub async fn pull(&self, options: &PullOptions) -> GitResult<()> {
        let args = build_pull_args(options);
        self.run(&args).await?;
        Ok(())
    }

    /// Push to a remote
    pub async fn push(&self, options: &PushOptions) -> GitResult<()> {
        let args = build_push_args(options);
        self.run(&args).await?;
        Ok(())
    }

    /// Query commit history
    ///
    /// An unborn HEAD (fresh repository) yields an empty list.
    pub async fn log(&self, options: &LogOptions) -> GitResult<Vec<CommitRecord>> {
        let args = build_log_args(options);
        match self.run_classified(&args, &UNBORN_HEAD_BENIGN).await? {
            Some(output) => parser::parse_log(&output.stdout, LOG_SENTINEL),
            None => Ok(Vec::new()),
        }
    }

    /// The most recent commits, newest first
    pub async fn history(&self, max_count: usize) -> GitResult<Vec<CommitRecord>> {
        self.log(&LogOptions {
            max_count: Some(max_count),
            ..LogOptions::default()
        })
        .await
    }

    /// Name of the current branch, or None when HEAD is detached
    pub async fn current_branch(&self) -> GitResult<Option<String>> {
        let output = self.run(&["branch", "--show-current"]).await?;
        let branch = output.stdout.trim();
        if branch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(branch.to_string()))
        }
    }

    /// List local branches
    pub async fn branches(&self) -> GitResult<Vec<BranchEntry>> {
        let output = self.run(&["branch"]).await?;
        Ok(parser::parse_branches(&output.stdout))
    }

    /// List configured remotes, one entry per direction
    pub async fn remotes(&self) -> GitResult<Vec<RemoteEntry>> {
        let output = self.run(&["remote", "-v"]).await?;
        Ok(parser::parse_remotes(&output.stdout))
    }

    /// List stash entries
    pub async fn stashes(&self) -> GitResult<Vec<StashEntry>> {
        let output = self.run(&["stash", "list"]).await?;
        Ok(parser::parse_stashes(&output.stdout))
    }

    /// List worktrees attached to this repository
    pub async fn worktrees(&self) -> GitResult<Vec<WorktreeEntry>> {
        let output = self.run(&["worktree", "list", "--porcelain"]).await?;
        Ok(parser::parse_worktrees(&output.stdout))
    }

    /// Fetch from a remote
    pub async fn fetch(&self, options: &FetchOptions) -> GitResult<()> {
        let args = build_fetch_args(options);
        self.run(&args).await?;
        Ok(())
    }

    /// Merge a branch into the current one
    pub async fn merge(&self, branch: &str, options: &MergeOptions) -> GitResult<()> {
        let args = build_merge_args(branch, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Create a tag at HEAD
    pub async fn tag(&self, name: &str, options: &TagOptions) -> GitResult<()> {
        let args = build_tag_args(name, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Raw output of git show for a revision
    pub async fn show(&self, revision: &str) -> GitResult<String> {
        let output = self.run(&["show", revision]).await?;
        Ok(output.stdout)
    }

    /// Reset HEAD, and optionally the index and working tree
    pub async fn reset(&self, options: &ResetOptions) -> GitResult<()> {
        let args = build_reset_args(options);
        self.run(&args).await?;
        Ok(())
    }

    /// Revert a commit
    pub async fn revert(&self, hash: &str, options: &RevertOptions) -> GitResult<()> {
        let args = build_revert_args(hash, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Stash pending changes
    pub async fn stash_push(&self, options: &StashPushOptions) -> GitResult<()> {
        let args = build_stash_push_args(options);
        self.run(&args).await?;
        Ok(())
    }

    /// Apply a stash entry by reference, e.g. "stash@{0}"
    pub async fn stash_apply(&self, reference: &str) -> GitResult<()> {
        self.run(&["stash", "apply", reference]).await?;
        Ok(())
    }

    /// Drop a stash entry by reference
    pub async fn stash_drop(&self, reference: &str) -> GitResult<()> {
        self.run(&["stash", "drop", reference]).await?;
        Ok(())
    }

    /// Read a config value, or None when the key is unset
    pub async fn config_get(&self, key: &str) -> GitResult<Option<String>> {
        let result = self
            .run_classified(&["config", "--get", key], &CONFIG_GET_BENIGN)
            .await?;
        Ok(result.map(|output| output.stdout.trim().to_string()))
    }

    /// Set a config value
    pub async fn config_set(&self, key: &str, value: &str) -> GitResult<()> {
        self.run(&["config", key, value]).await?;
        Ok(())
    }

    /// Add a remote
    pub async fn remote_add(&self, name: &str, url: &str) -> GitResult<()> {
        self.run(&["remote", "add", name, url]).await?;
        Ok(())
    }

    /// Remove a remote
    pub async fn remote_remove(&self, name: &str) -> GitResult<()> {
        self.run(&["remote", "remove", name]).await?;
        Ok(())
    }

    /// Whether the given commit exists in this repository
    pub async fn commit_exists(&self, hash: &str) -> GitResult<bool> {
        let result = self
            .run_classified(&["cat-file", "-e", hash], &OBJECT_LOOKUP_BENIGN)
            .await?;
        Ok(result.is_some())
    }

    /// Full message of a commit, or None when the hash is unknown
    pub async fn commit_message(&self, hash: &str) -> GitResult<Option<String>> {
        let args = ["log", "-1", "--pretty=format:%B", hash];
        let result = self.run_classified(&args, &OBJECT_LOOKUP_BENIGN).await?;
        Ok(result.map(|output| output.stdout.trim().to_string()))
    }

    /// Cherry-pick a commit onto the current branch
    pub async fn cherry_pick(&self, hash: &str, options: &CherryPickOptions) -> GitResult<()> {
        let args = build_cherry_pick_args(hash, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Contents of a file at a revision, or None when it does not exist
    /// there
    pub async fn file_at_revision(&self, revision: &str, path: &str) -> GitResult<Option<String>> {
        let spec = format!("{}:{}", revision, path);
        let result = self
            .run_classified(&["show", spec.as_str()], &PATH_LOOKUP_BENIGN)
            .await?;
        Ok(result.map(|output| output.stdout))
    }

    /// Top-level directory of the repository, or None outside one
    pub async fn repo_root(&self) -> GitResult<Option<PathBuf>> {
        let result = self
            .run_classified(&["rev-parse", "--show-toplevel"], &REPO_DETECT_BENIGN)
            .await?;
        Ok(result.map(|output| PathBuf::from(output.stdout.trim())))
    }

    /// Whether the configured path is inside a git working tree
    pub async fn is_repository(&self) -> GitResult<bool> {
        let result = self
            .run_classified(&["rev-parse", "--is-inside-work-tree"], &REPO_DETECT_BENIGN)
            .await?;
        Ok(match result {
            Some(output) => output.stdout.trim() == "true",
            None => false,
        })
    }

    /// Raw blame output for a file
    pub async fn blame(&self, path: &str) -> GitResult<String> {
        let output = self.run(&["blame", "--", path]).await?;
        Ok(output.stdout)
    }

    /// Whether the working tree has no pending changes
    pub async fn is_clean(&self) -> GitResult<bool> {
        Ok(self.status().await?.is_empty())
    }

    /// Paths of untracked files
    pub async fn untracked_files(&self) -> GitResult<Vec<String>> {
        let changes = self.status().await?;
        Ok(changes
            .into_iter()
            .filter(|entry| entry.kind == ChangeKind::Untracked)
            .map(|entry| entry.path)
            .collect())
    }

    /// Paths with unresolved merge conflicts
    pub async fn conflicted_files(&self) -> GitResult<Vec<String>> {
        let output = self
            .run(&["diff", "--name-only", "--diff-filter=U"])
            .await?;
        Ok(output
            .stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    /// Hash of the latest commit, or None on an unborn HEAD
    pub async fn latest_commit(&self) -> GitResult<Option<String>> {
        let result = self
            .run_classified(&["rev-parse", "HEAD"], &UNBORN_HEAD_BENIGN)
            .await?;
        Ok(result.map(|output| output.stdout.trim().to_string()))
    }

    /// Version of the underlying git binary
    ///
    /// Returns the extracted dotted version, or the raw banner when the
    /// format is unrecognized.
    pub async fn version(&self) -> GitResult<String> {
        let output = self.run(&["--version"]).await?;
        Ok(version::parse_version(&output.stdout))
    }

    /// Add a worktree at the given path
    pub async fn worktree_add(&self, path: &Path, options: &WorktreeAddOptions) -> GitResult<()> {
        let args = build_worktree_add_args(path, options);
        self.run(&args).await?;
        Ok(())
    }

    /// Remove a worktree
    pub async fn worktree_remove(&self, path: &Path, force: bool) -> GitResult<()> {
        let mut args = vec!["worktree".to_string(), "remove".to_string()];
        if force {
            args.push("--force".to_string());
        }
        args.push(path.display().to_string());
        self.run(&args).await?;
        Ok(())
    }
}

// Argument builders. Flag tokens are emitted in a fixed order and omitted
// exactly when their option is false/absent.

fn build_clone_args(url: &str, target: &Path, options: &CloneOptions) -> Vec<String> {
    let mut args = vec!["clone".to_string()];
    if options.bare {
        args.push("--bare".to_string());
    }
    if let Some(depth) = options.depth {
        args.push("--depth".to_string());
        args.push(depth.to_string());
    }
    args.push(url.to_string());
    args.push(target.display().to_string());
    args
}

fn build_commit_args(message: &str, options: &CommitOptions) -> Vec<String> {
    let mut args = vec!["commit".to_string()];
    if options.all {
        args.push("-a".to_string());
    }
    if options.allow_empty {
        args.push("--allow-empty".to_string());
    }
    args.push("-m".to_string());
    args.push(message.to_string());
    args
}

fn build_pull_args(options: &PullOptions) -> Vec<String> {
    let mut args = vec!["pull".to_string()];
    if options.rebase {
        args.push("--rebase".to_string());
    }
    if let Some(remote) = &options.remote {
        args.push(remote.clone());
        if let Some(branch) = &options.branch {
            args.push(branch.clone());
        }
    }
    args
}

fn build_push_args(options: &PushOptions) -> Vec<String> {
    let mut args = vec!["push".to_string()];
    if options.force {
        args.push("--force".to_string());
    }
    if options.set_upstream {
        args.push("--set-upstream".to_string());
    }
    if let Some(remote) = &options.remote {
        args.push(remote.clone());
        if let Some(branch) = &options.branch {
            args.push(branch.clone());
        }
    }
    args
}

fn build_fetch_args(options: &FetchOptions) -> Vec<String> {
    let mut args = vec!["fetch".to_string()];
    if options.all {
        args.push("--all".to_string());
    }
    if options.prune {
        args.push("--prune".to_string());
    }
    if let Some(remote) = &options.remote {
        args.push(remote.clone());
    }
    args
}

fn build_merge_args(branch: &str, options: &MergeOptions) -> Vec<String> {
    let mut args = vec!["merge".to_string()];
    if options.no_ff {
        args.push("--no-ff".to_string());
    }
    if let Some(message) = &options.message {
        args.push("-m".to_string());
        args.push(message.clone());
    }
    args.push(branch.to_string());
    args
}

fn build_tag_args(name: &str, options: &TagOptions) -> Vec<String> {
    let mut args = vec!["tag".to_string()];
    if options.force {
        args.push("-f".to_string());
    }
    if let Some(message) = &options.message {
        args.push("-a".to_string());
        args.push("-m".to_string());
        args.push(message.clone());
    }
    args.push(name.to_string());
    args
}

fn build_reset_args(options: &ResetOptions) -> Vec<String> {
    let mut args = vec!["reset".to_string()];
    match options.mode {
        ResetMode::Soft => args.push("--soft".to_string()),
        ResetMode::Mixed => args.push("--mixed".to_string()),
        ResetMode::Hard => args.push("--hard".to_string()),
    }
    if let Some(target) = &options.target {
        args.push(target.clone());
    }
    args
}

fn build_revert_args(hash: &str, options: &RevertOptions) -> Vec<String> {
    let mut args = vec!["revert".to_string()];
    if options.no_commit {
        args.push("--no-commit".to_string());
    }
    args.push(hash.to_string());
    args
}

fn build_cherry_pick_args(hash: &str, options: &CherryPickOptions) -> Vec<String> {
    let mut args = vec!["cherry-pick".to_string()];
    if options.no_commit {
        args.push("--no-commit".to_string());
    }
    args.push(hash.to_string());
    args
}

fn build_stash_push_args(options: &StashPushOptions) -> Vec<String> {
    let mut args = vec!["stash".to_string(), "push".to_string()];
    if options.include_untracked {
        args.push("-u".to_string());
    }
    if let Some(message) = &options.message {
        args.push("-m".to_string());
        args.push(message.clone());
    }
    args
}

fn build_log_args(options: &LogOptions) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        format!("--pretty=format:%H%n%an%n%ae%n%at%n%s%n%b{}", LOG_SENTINEL),
    ];
    if let Some(max_count) = options.max_count {
        args.push("-n".to_string());
        args.push(max_count.to_string());
    }
    if let Some(skip) = options.skip {
        args.push(format!("--skip={}", skip));
    }
    if let Some(path) = &options.path {
        args.push("--".to_string());
        args.push(path.clone());
    }
    args
}

fn build_worktree_add_args(path: &Path, options: &WorktreeAddOptions) -> Vec<String> {
    let mut args = vec!["worktree".to_string(), "add".to_string()];
    if let Some(branch) = &options.branch {
        args.push("-b".to_string());
        args.push(branch.clone());
    }
    if options.detach {
        args.push("--detach".to_string());
    }
    args.push(path.display().to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_args_default() {
        let args = build_clone_args("https://x/repo.git", Path::new("/tmp/repo"), &CloneOptions::default());
        assert_eq!(args, vec!["clone", "https://x/repo.git", "/tmp/repo"]);
    }

    #[test]
    fn test_clone_args_all_flags() {
        let options = CloneOptions {
            bare: true,
            depth: Some(1),
        };
        let args = build_clone_args("https://x/repo.git", Path::new("/tmp/repo"), &options);
        assert_eq!(
            args,
            vec!["clone", "--bare", "--depth", "1", "https://x/repo.git", "/tmp/repo"]
        );
    }

    #[test]
    fn test_commit_args_flag_order() {
        let options = CommitOptions {
            all: true,
            allow_empty: true,
        };
        let args = build_commit_args("msg", &options);
        assert_eq!(args, vec!["commit", "-a", "--allow-empty", "-m", "msg"]);
    }

    #[test]
    fn test_commit_args_flags_omitted() {
        let args = build_commit_args("msg", &CommitOptions::default());
        assert_eq!(args, vec!["commit", "-m", "msg"]);
    }

    #[test]
    fn test_push_args() {
        let options = PushOptions {
            remote: Some("origin".to_string()),
            branch: Some("main".to_string()),
            force: true,
            set_upstream: true,
        };
        let args = build_push_args(&options);
        assert_eq!(
            args,
            vec!["push", "--force", "--set-upstream", "origin", "main"]
        );
    }

    #[test]
    fn test_push_args_branch_requires_remote() {
        let options = PushOptions {
            branch: Some("main".to_string()),
            ..PushOptions::default()
        };
        // A branch without a remote is not emitted
        assert_eq!(build_push_args(&options), vec!["push"]);
    }

    #[test]
    fn test_pull_args() {
        let options = PullOptions {
            remote: Some("origin".to_string()),
            branch: None,
            rebase: true,
        };
        assert_eq!(build_pull_args(&options), vec!["pull", "--rebase", "origin"]);
    }

    #[test]
    fn test_fetch_args() {
        let options = FetchOptions {
            remote: Some("origin".to_string()),
            all: false,
            prune: true,
        };
        assert_eq!(build_fetch_args(&options), vec!["fetch", "--prune", "origin"]);
    }

    #[test]
    fn test_merge_args() {
        let options = MergeOptions {
            no_ff: true,
            message: Some("merge it".to_string()),
        };
        assert_eq!(
            build_merge_args("feature", &options),
            vec!["merge", "--no-ff", "-m", "merge it", "feature"]
        );
    }

    #[test]
    fn test_tag_args_annotated() {
        let options = TagOptions {
            message: Some("release".to_string()),
            force: false,
        };
        assert_eq!(
            build_tag_args("v1.0.0", &options),
            vec!["tag", "-a", "-m", "release", "v1.0.0"]
        );
    }

    #[test]
    fn test_tag_args_lightweight() {
        assert_eq!(
            build_tag_args("v1.0.0", &TagOptions::default()),
            vec!["tag", "v1.0.0"]
        );
    }

    #[test]
    fn test_reset_args_modes() {
        assert_eq!(
            build_reset_args(&ResetOptions::default()),
            vec!["reset", "--mixed"]
        );
        let options = ResetOptions {
            mode: ResetMode::Hard,
            target: Some("HEAD~1".to_string()),
        };
        assert_eq!(build_reset_args(&options), vec!["reset", "--hard", "HEAD~1"]);
    }

    #[test]
    fn test_stash_push_args() {
        let options = StashPushOptions {
            message: Some("wip".to_string()),
            include_untracked: true,
        };
        assert_eq!(
            build_stash_push_args(&options),
            vec!["stash", "push", "-u", "-m", "wip"]
        );
    }

    #[test]
    fn test_log_args() {
        let options = LogOptions {
            max_count: Some(5),
            skip: Some(10),
            path: Some("src/main.rs".to_string()),
        };
        let args = build_log_args(&options);
        assert_eq!(args[0], "log");
        assert!(args[1].starts_with("--pretty=format:%H%n%an%n%ae%n%at%n%s%n%b"));
        assert_eq!(&args[2..], &["-n", "5", "--skip=10", "--", "src/main.rs"]);
    }

    #[test]
    fn test_worktree_add_args() {
        let options = WorktreeAddOptions {
            branch: Some("feature".to_string()),
            detach: false,
        };
        assert_eq!(
            build_worktree_add_args(Path::new("/tmp/wt"), &options),
            vec!["worktree", "add", "-b", "feature", "/tmp/wt"]
        );
    }

    #[test]
    fn test_empty_repository_path_is_usage_error() {
        let result = Repository::new("");
        assert!(matches!(result, Err(GitError::Usage(_))));
    }
}
