//! Version control of the mirror.
//!
//! The engine depends on [`VersionControl`]; [`Git`] implements it by
//! running the `git` binary inside the mirror, so the user's own
//! credentials and transport configuration apply to clone and push.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use crate::error::{Error, GitError, RemoteError, Result};

/// Operations the engine needs from the mirror's version control.
///
/// Paths are relative to the mirror root.
pub trait VersionControl {
    /// Clone `url` into the mirror location.
    fn clone_from(&self, url: &str) -> Result<()>;

    /// Bring the mirror up to date with its remote.
    fn pull(&self) -> Result<()>;

    /// Unix time (seconds) of the latest commit touching `path`, or
    /// `None` if it was never committed.
    fn last_commit_time(&self, path: &Path) -> Result<Option<i64>>;

    /// Stage `path`.
    fn add(&self, path: &Path) -> Result<()>;

    /// Commit staged changes.
    fn commit(&self, message: &str) -> Result<()>;

    /// Push the current branch to its remote.
    fn push(&self) -> Result<()>;

    /// Show the history of `path` on the terminal.
    fn log(&self, path: &Path) -> Result<()>;
}

/// `git` command-line client bound to one working tree.
pub struct Git {
    dir: PathBuf,
}

impl Git {
    /// Bind to the working tree at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotInstalled` if no `git` binary is on PATH.
    pub fn new(dir: PathBuf) -> Result<Self> {
        which::which("git").map_err(|_| GitError::NotInstalled)?;
        Ok(Self { dir })
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.dir).args(args);
        cmd
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        trace!(dir = %self.dir.display(), ?args, "running git");
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)?;
        Ok(output)
    }

    /// Run git and return stdout, failing on a non-zero exit.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr: stderr(&output),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn succeeds(&self, args: &[&str]) -> Result<bool> {
        Ok(self.output(args)?.status.success())
    }

    fn has_commits(&self) -> Result<bool> {
        self.succeeds(&["rev-parse", "--verify", "--quiet", "HEAD"])
    }

    fn has_upstream(&self) -> Result<bool> {
        self.succeeds(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])
    }
}

/// A missing binary means git is not installed; anything else is passed on.
fn spawn_error(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        GitError::NotInstalled.into()
    } else {
        Error::Io(e)
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl VersionControl for Git {
    fn clone_from(&self, url: &str) -> Result<()> {
        debug!(url, dir = %self.dir.display(), "cloning mirror");

        if let Some(parent) = self.dir.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let output = Command::new("git")
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(&self.dir)
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)?;

        if !output.status.success() {
            return Err(RemoteError::Clone {
                url: url.to_string(),
                stderr: stderr(&output),
            }
            .into());
        }
        Ok(())
    }

    fn pull(&self) -> Result<()> {
        if !self.has_upstream()? {
            debug!("mirror has no upstream yet, not pulling");
            return Ok(());
        }

        let output = self.output(&["pull", "--ff-only", "--quiet"])?;
        if !output.status.success() {
            return Err(RemoteError::Pull(stderr(&output)).into());
        }
        Ok(())
    }

    fn last_commit_time(&self, path: &Path) -> Result<Option<i64>> {
        if !self.has_commits()? {
            return Ok(None);
        }

        let path = path_arg(path);
        let stdout = self.run(&["log", "-1", "--format=%ct", "--", &path])?;
        let stamp = stdout.trim();
        if stamp.is_empty() {
            return Ok(None);
        }

        stamp.parse::<i64>().map(Some).map_err(|_| {
            GitError::CommandFailed {
                command: "log".to_string(),
                stderr: format!("unexpected commit time: {}", stamp),
            }
            .into()
        })
    }

    fn add(&self, path: &Path) -> Result<()> {
        let path = path_arg(path);
        self.run(&["add", "--", &path])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "--quiet", "-m", message])?;
        Ok(())
    }

    fn push(&self) -> Result<()> {
        let output = self.output(&["push", "--quiet", "--set-upstream", "origin", "HEAD"])?;
        if !output.status.success() {
            return Err(RemoteError::Push {
                mirror: self.dir.clone(),
                stderr: stderr(&output),
            }
            .into());
        }
        Ok(())
    }

    fn log(&self, path: &Path) -> Result<()> {
        let path = path_arg(path);
        let status = self
            .command(&["log", "--", &path])
            .status()
            .map_err(spawn_error)?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                command: "log".to_string(),
                stderr: format!("exited with {}", status),
            }
            .into());
        }
        Ok(())
    }
}
