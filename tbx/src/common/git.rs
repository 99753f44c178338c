//! # Git Queries (`common::git`)
//!
//! File: tbx/src/common/git.rs
//!
//! ## Overview
//!
//! Read-only questions about a git working tree, answered by running the
//! `git` command line through the process runner: the latest tag, a commit
//! hash, the current branch, and a classified `git status`.
//!
//! Like every other command run by the toolbox, git's stdout and stderr are
//! combined and its exit status is not checked, so asking outside a
//! repository returns git's complaint as text rather than an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tbx::common::git::GitRepo;
//!
//! # fn main() -> tbx::Result<()> {
//! let repo = GitRepo::current();
//! println!("on {} at {}", repo.current_branch()?, repo.hash(None)?);
//! let status = repo.status()?;
//! println!("{} staged, {} untracked", status.staged.len(), status.untracked.len());
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::{CommandLine, Runner};
use crate::core::error::Result;
use anyhow::anyhow;
use regex_lite::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Porcelain line classifiers, compiled once.
struct StatusPatterns {
    prefix: Regex,
    staged: Regex,
    unstaged: Regex,
    untracked: Regex,
}

fn status_patterns() -> Option<&'static StatusPatterns> {
    static PATTERNS: OnceLock<Option<StatusPatterns>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Some(StatusPatterns {
                prefix: Regex::new(r"^[AM? ][AM? ]\s").ok()?,
                staged: Regex::new(r"^[AM].\s").ok()?,
                unstaged: Regex::new(r"^.[AM]\s").ok()?,
                untracked: Regex::new(r"^\?\?").ok()?,
            })
        })
        .as_ref()
}

/// Files reported by `git status --porcelain`, grouped by state.
///
/// A file both staged and modified again in the worktree appears in
/// `staged` and `unstaged`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatus {
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
    pub untracked: Vec<String>,
}

impl GitStatus {
    /// Classifies porcelain status lines.
    pub fn parse(porcelain: &str) -> Result<Self> {
        let StatusPatterns {
            prefix,
            staged,
            unstaged,
            untracked,
        } = status_patterns().ok_or_else(|| anyhow!("Invalid git status pattern"))?;

        let mut status = GitStatus::default();
        for line in porcelain.trim_end().lines() {
            let name = prefix.replace(line, "").into_owned();
            if staged.is_match(line) {
                status.staged.push(name.clone());
            }
            if unstaged.is_match(line) {
                status.unstaged.push(name.clone());
            }
            if untracked.is_match(line) {
                status.untracked.push(name);
            }
        }
        Ok(status)
    }

    /// True when nothing is staged, modified or untracked.
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }
}

/// A git working tree to query.
#[derive(Debug, Clone, Default)]
pub struct GitRepo {
    runner: Runner,
}

impl GitRepo {
    /// The repository containing the current working directory.
    pub fn current() -> Self {
        Self::default()
    }

    /// The repository containing `dir`.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        GitRepo {
            runner: Runner::new().current_dir(dir),
        }
    }

    /// The last tag in `git tag` order, or `""` when there are none.
    pub fn last_tag(&self) -> Result<String> {
        let output = self.runner.capture("git --no-pager tag")?;
        let tag = output.trim().lines().last().unwrap_or_default();
        Ok(tag.to_string())
    }

    /// The full hash of `reference`, or of `HEAD` when `None`.
    pub fn hash(&self, reference: Option<&str>) -> Result<String> {
        let mut command = CommandLine::parse("git --no-pager log -1 --format=format:%H")?;
        if let Some(reference) = reference.filter(|r| !r.is_empty()) {
            command = command.with_args([reference]);
        }
        self.runner.capture(command)
    }

    /// The short name of the checked out branch.
    pub fn current_branch(&self) -> Result<String> {
        let output = self.runner.capture("git symbolic-ref --short HEAD")?;
        Ok(output.trim().to_string())
    }

    /// Staged, unstaged and untracked files.
    pub fn status(&self) -> Result<GitStatus> {
        let output = self.runner.capture("git status --porcelain")?;
        debug!("git status: {} line(s)", output.lines().count());
        GitStatus::parse(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const IDENTITY: &str = "git -c user.name=Tbx -c user.email=tbx@example.com -c commit.gpgsign=false";

    fn git(dir: &Path, args: &str) -> String {
        Runner::new()
            .current_dir(dir)
            .capture(format!("git {}", args).as_str())
            .unwrap()
    }

    fn commit(dir: &Path, message: &str) {
        Runner::new()
            .current_dir(dir)
            .capture(format!("{} commit -q -m '{}'", IDENTITY, message).as_str())
            .unwrap();
    }

    fn init_repo(dir: &Path) {
        git(dir, "init -q");
        git(dir, "checkout -q -b trunk");
        fs::write(dir.join("tracked"), "first\n").unwrap();
        git(dir, "add tracked");
        commit(dir, "initial");
    }

    #[test]
    fn test_git_status_parse() -> Result<()> {
        let status = GitStatus::parse("A  new.rs\nM  changed.rs\n M edited.rs\nAM both.rs\n?? loose.txt\n")?;
        assert_eq!(status.staged, ["new.rs", "changed.rs", "both.rs"]);
        assert_eq!(status.unstaged, ["edited.rs", "both.rs"]);
        assert_eq!(status.untracked, ["loose.txt"]);
        assert!(GitStatus::parse("")?.is_clean());
        Ok(())
    }

    #[test]
    fn test_git_status_patterns_compiled_once() {
        let first = status_patterns().expect("status patterns compile");
        let second = status_patterns().expect("status patterns compile");
        assert!(std::ptr::eq(first, second));
        assert!(first.untracked.is_match("?? loose.txt"));
    }

    #[test]
    fn test_git_current_branch() -> Result<()> {
        let tmp = tempdir()?;
        init_repo(tmp.path());
        assert_eq!(GitRepo::at(tmp.path()).current_branch()?, "trunk");
        Ok(())
    }

    #[test]
    fn test_git_hash() -> Result<()> {
        let tmp = tempdir()?;
        init_repo(tmp.path());
        let repo = GitRepo::at(tmp.path());
        let head = git(tmp.path(), "rev-parse HEAD");
        let hash = repo.hash(None)?;
        assert_eq!(hash.len(), 40);
        assert_eq!(hash, head.trim());

        fs::write(tmp.path().join("tracked"), "second\n")?;
        git(tmp.path(), "add tracked");
        commit(tmp.path(), "second");
        assert_eq!(repo.hash(Some("HEAD~1"))?, hash);
        assert_ne!(repo.hash(None)?, hash);
        Ok(())
    }

    #[test]
    fn test_git_last_tag() -> Result<()> {
        let tmp = tempdir()?;
        init_repo(tmp.path());
        let repo = GitRepo::at(tmp.path());
        assert_eq!(repo.last_tag()?, "");
        git(tmp.path(), "tag v1.0");
        git(tmp.path(), "tag v1.1");
        assert_eq!(repo.last_tag()?, "v1.1");
        Ok(())
    }

    #[test]
    fn test_git_status() -> Result<()> {
        let tmp = tempdir()?;
        init_repo(tmp.path());
        let repo = GitRepo::at(tmp.path());
        assert!(repo.status()?.is_clean());

        fs::write(tmp.path().join("tracked"), "changed\n")?;
        fs::write(tmp.path().join("staged"), "new\n")?;
        git(tmp.path(), "add staged");
        fs::write(tmp.path().join("untracked"), "loose\n")?;

        let status = repo.status()?;
        assert_eq!(status.staged, ["staged"]);
        assert_eq!(status.unstaged, ["tracked"]);
        assert_eq!(status.untracked, ["untracked"]);
        Ok(())
    }
}
