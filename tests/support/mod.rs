//! Test support utilities for envsync integration tests.
//!
//! Each test gets its own home directory, project checkout and bare
//! "shared" repository, so tests can run in parallel.

#![allow(dead_code)]

pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

use age::secrecy::ExposeSecret;
use age::x25519;
use tempfile::TempDir;

/// One teammate: a home directory and a project checkout.
pub struct Test {
    /// Scratch space holding the project checkout
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Public half of this teammate's age key
    pub public_key: String,
}

impl Test {
    /// A teammate with a key file at `~/key.txt` and an empty project
    /// named [`PROJECT`] marked as a git checkout.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        let identity = x25519::Identity::generate();
        fs::write(
            home.path().join("key.txt"),
            format!("{}\n", identity.to_string().expose_secret()),
        )
        .expect("failed to write key");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(home.path().join("key.txt"), fs::Permissions::from_mode(0o600))
                .expect("failed to restrict key");
        }

        fs::create_dir_all(dir.path().join(PROJECT).join(".git")).expect("failed to create project");

        Self {
            dir,
            home,
            public_key: identity.to_public().to_string(),
        }
    }

    /// A teammate whose mirror is a clone of `remote`, whose private key
    /// is configured and who is listed as a recipient of the project.
    pub fn joined(remote: &Remote) -> Self {
        let t = Self::new();
        assert_success(&t.init_cmd(&remote.url()));
        assert_success(&t.privkey(&t.key_path()));
        assert_success(&t.addkeys(&[t.public_key.as_str()]));
        t
    }

    /// Project root; commands run here.
    pub fn project(&self) -> PathBuf {
        self.dir.path().join(PROJECT)
    }

    pub fn key_path(&self) -> PathBuf {
        self.home.path().join("key.txt")
    }

    pub fn mirror(&self) -> PathBuf {
        self.home.path().join(".envsync").join("repo")
    }

    pub fn write(&self, file: &str, contents: &str) {
        fs::write(self.project().join(file), contents).expect("failed to write working file");
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.project().join(file)).expect("failed to read working file")
    }

    /// Set a working file's mtime `secs` away from now.
    pub fn shift_mtime(&self, file: &str, secs: i64) {
        let now = SystemTime::now();
        let offset = Duration::from_secs(secs.unsigned_abs());
        let when = if secs >= 0 { now + offset } else { now - offset };
        fs::File::options()
            .write(true)
            .open(self.project().join(file))
            .and_then(|f| f.set_modified(when))
            .expect("failed to set mtime");
    }

    /// Number of commits in the mirror.
    pub fn mirror_commits(&self) -> usize {
        git(&self.mirror(), &["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("bad commit count")
    }

    /// Subject of the latest commit in the mirror.
    pub fn last_commit_subject(&self) -> String {
        let out = git(&self.mirror(), &["log", "-1", "--format=%s"]);
        out.trim().to_string()
    }
}

/// A bare repository standing in for the team's shared remote.
pub struct Remote {
    dir: TempDir,
}

impl Remote {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create remote dir");
        git(dir.path(), &["init", "--quiet", "--bare"]);
        Self { dir }
    }

    pub fn url(&self) -> String {
        self.dir.path().display().to_string()
    }

    /// Subject of the latest commit that reached the remote.
    pub fn last_commit_subject(&self) -> String {
        git(self.dir.path(), &["log", "-1", "--format=%s"]).trim().to_string()
    }
}

/// Run git in `dir`, panicking on failure, and return stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .envs(GIT_ENV.iter().copied())
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}
