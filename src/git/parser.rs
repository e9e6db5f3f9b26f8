use crate::error::{GitError, GitResult};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

/// Default end-of-record sentinel for log output
pub const LOG_SENTINEL: &str = "<END>";

/// Parse git log output formatted as sentinel-delimited records
///
/// Each record carries five positional lines (hash, author name, author
/// email, epoch seconds, subject); any remaining lines form the body.
/// Expected format string: %H%n%an%n%ae%n%at%n%s%n%b followed by the
/// sentinel.
pub fn parse_log(output: &str, sentinel: &str) -> GitResult<Vec<CommitRecord>> {
    let mut commits = Vec::new();

    for record in output.split(sentinel) {
        if record.trim().is_empty() {
            continue;
        }

        let lines: Vec<&str> = record.trim_start_matches('\n').lines().collect();
        if lines.len() < 5 {
            return Err(GitError::Parse(format!(
                "log record has {} lines, expected at least 5: {:?}",
                lines.len(),
                record
            )));
        }

        let epoch: i64 = lines[3].trim().parse().map_err(|_| {
            GitError::Parse(format!("invalid author timestamp: {:?}", lines[3]))
        })?;
        let timestamp = Utc
            .timestamp_opt(epoch, 0)
            .single()
            .ok_or_else(|| GitError::Parse(format!("timestamp out of range: {}", epoch)))?;

        commits.push(CommitRecord {
            hash: lines[0].trim().to_string(),
            author_name: lines[1].to_string(),
            author_email: lines[2].to_string(),
            timestamp,
            subject: lines[4].to_string(),
            body: lines[5..].join("\n").trim().to_string(),
        });
    }

    Ok(commits)
}

/// Parse git status --porcelain output
///
/// Each non-blank line is a two-character status code followed by the path.
pub fn parse_status(output: &str) -> Vec<ChangeEntry> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.len() < 3 || !line.is_char_boundary(2) {
            continue;
        }

        let code = &line[..2];
        let path = line[2..].trim_start();
        if path.is_empty() {
            continue;
        }

        let kind = if code == "??" {
            ChangeKind::Untracked
        } else {
            match code.trim_start().chars().next() {
                Some('M') => ChangeKind::Modified,
                Some('A') => ChangeKind::Added,
                Some('D') => ChangeKind::Deleted,
                Some('R') => ChangeKind::Renamed,
                Some('C') => ChangeKind::Copied,
                Some('U') => ChangeKind::Unmerged,
                _ => ChangeKind::Unknown,
            }
        };

        entries.push(ChangeEntry {
            path: path.to_string(),
            kind,
        });
    }

    entries
}

/// Parse git branch output into branch names
///
/// The current-branch marker is stripped and recorded.
pub fn parse_branches(output: &str) -> Vec<BranchEntry> {
    let mut branches = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let is_current = line.starts_with('*');
        let name = line.trim_start_matches('*').trim();
        if name.is_empty() {
            continue;
        }

        branches.push(BranchEntry {
            name: name.to_string(),
            is_current,
        });
    }

    branches
}

/// Parse git remote -v output
///
/// Lines look like "origin  https://example.com/repo.git (fetch)". A remote
/// normally appears twice (fetch and push); malformed lines are skipped, and
/// the full accumulated list is always returned.
pub fn parse_remotes(output: &str) -> Vec<RemoteEntry> {
    let mut remotes = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            continue;
        }
        let direction = parts[2];
        if !direction.starts_with('(') || !direction.ends_with(')') {
            continue;
        }

        remotes.push(RemoteEntry {
            name: parts[0].to_string(),
            url: parts[1].to_string(),
            direction: direction[1..direction.len() - 1].to_string(),
        });
    }

    remotes
}

/// Parse git stash list output
///
/// Lines look like "stash@{0}: WIP on main: abc123 message".
pub fn parse_stashes(output: &str) -> Vec<StashEntry> {
    let mut stashes = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(rest) = line.strip_prefix("stash@{") else {
            continue;
        };
        let Some(close) = rest.find('}') else {
            continue;
        };
        let Ok(index) = rest[..close].parse::<usize>() else {
            continue;
        };
        let Some(description) = rest[close + 1..].strip_prefix(':') else {
            continue;
        };

        stashes.push(StashEntry {
            index,
            description: description.trim().to_string(),
            reference: format!("stash@{{{}}}", index),
        });
    }

    stashes
}

/// Parse git worktree list --porcelain output
///
/// Each worktree is a run of contiguous "key value" lines terminated by a
/// blank line; value-less keys (bare, detached) map to empty values.
pub fn parse_worktrees(output: &str) -> Vec<WorktreeEntry> {
    let mut worktrees = Vec::new();
    let mut attributes = HashMap::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            if !attributes.is_empty() {
                worktrees.push(WorktreeEntry {
                    attributes: std::mem::take(&mut attributes),
                });
            }
            continue;
        }

        let (key, value) = match line.split_once(' ') {
            Some((key, value)) => (key, value),
            None => (line, ""),
        };
        attributes.insert(key.to_string(), value.to_string());
    }

    if !attributes.is_empty() {
        worktrees.push(WorktreeEntry { attributes });
    }

    worktrees
}

/// Represents one commit parsed from log output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
    pub subject: String,
    pub body: String,
}

/// Represents one file's status relative to the last commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub path: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Untracked,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Unmerged,
    Unknown,
}

/// Represents a branch from git branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    pub name: String,
    pub is_current: bool,
}

/// Represents one direction of a configured remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
    pub direction: String,
}

/// Represents a stash entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    pub index: usize,
    pub description: String,
    pub reference: String,
}

/// Represents one worktree from the porcelain listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeEntry {
    pub attributes: HashMap<String, String>,
}

impl WorktreeEntry {
    /// Filesystem path of the worktree
    pub fn path(&self) -> Option<&str> {
        self.attributes.get("worktree").map(String::as_str)
    }

    /// Commit the worktree is checked out at
    pub fn head(&self) -> Option<&str> {
        self.attributes.get("HEAD").map(String::as_str)
    }

    /// Checked-out branch ref, if not detached
    pub fn branch(&self) -> Option<&str> {
        self.attributes.get("branch").map(String::as_str)
    }

    pub fn is_bare(&self) -> bool {
        self.attributes.contains_key("bare")
    }

    pub fn is_detached(&self) -> bool {
        self.attributes.contains_key("detached")
    }
}
