use crate::error::{GitError, GitResult};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time;

/// Default time a git command may run before it is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Per-call execution options
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Working directory override; defaults to the executor's repository path
    pub cwd: Option<PathBuf>,
    /// Environment overlay merged over the executor's base snapshot
    pub env: HashMap<String, String>,
    /// How long the process may run before it is killed
    pub timeout: Duration,
    /// Treat a non-zero exit code as an error
    pub check: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            env: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            check: true,
        }
    }
}

impl ExecOptions {
    /// Options that leave exit-code interpretation to the caller
    pub fn unchecked() -> Self {
        Self {
            check: false,
            ..Self::default()
        }
    }

    /// Override the working directory for this call
    pub fn in_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Override the timeout for this call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Executes git commands within a repository
///
/// Each call spawns exactly one child process and fully drains its output
/// streams before resolving. The child sees the base environment snapshot
/// given at construction overlaid with the per-call environment; the ambient
/// process environment is never consulted after construction.
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
    git_bin: String,
    base_env: HashMap<String, String>,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    ///
    /// Snapshots the current process environment as the base environment.
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self::with_environment(repo_path, "git", std::env::vars().collect())
    }

    /// Create a GitExecutor with an explicit binary and base environment
    pub fn with_environment<P: AsRef<Path>>(
        repo_path: P,
        git_bin: impl Into<String>,
        base_env: HashMap<String, String>,
    ) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            git_bin: git_bin.into(),
            base_env,
        }
    }

    /// Execute a git command and return its captured output
    ///
    /// The argument vector should not include the "git" prefix.
    /// Example: executor.execute(&["status", "--porcelain"], &ExecOptions::default())
    pub async fn execute<S: AsRef<OsStr>>(
        &self,
        args: &[S],
        options: &ExecOptions,
    ) -> GitResult<CommandOutput> {
        if args.is_empty() {
            return Err(GitError::Usage("empty argument vector".to_string()));
        }

        let cwd = options.cwd.as_deref().unwrap_or(&self.repo_path);

        let mut cmd = Command::new(&self.git_bin);
        cmd.args(args)
            .current_dir(cwd)
            .env_clear()
            .envs(&self.base_env)
            .envs(&options.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| GitError::SpawnFailed {
            program: self.git_bin.clone(),
            source: e,
        })?;

        // wait_with_output drains both streams to EOF before resolving; a
        // timeout drops the future, which kills the child via kill_on_drop.
        let output = match time::timeout(options.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => return Err(GitError::Timeout(options.timeout)),
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if options.check && !success {
            return Err(GitError::CommandFailed {
                code: exit_code,
                stderr,
            });
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Get the configured git binary
    pub fn git_bin(&self) -> &str {
        &self.git_bin
    }
}
