//! The sync engine.
//!
//! Maps working files to their artifacts in the mirror and moves content
//! between the two. Every collaborator comes in through a trait object so
//! the engine itself does no process spawning, terminal I/O or network.

mod commit;
mod update;


use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::cipher::Encryptor;
use crate::core::config::{Paths, Settings};
use crate::core::confirm::Confirm;
use crate::core::freshness::Comparison;
use crate::core::git::VersionControl;
use crate::core::mirror::Mirror;
use crate::core::project::Project;
use crate::core::recipients::RecipientList;
use crate::error::{Result, SyncError};

pub use commit::CommitOutcome;
pub use update::{FileReport, FileStatus};

/// Synchronizes working files with the mirror.
pub struct SyncEngine<'a> {
    paths: &'a Paths,
    settings: &'a Settings,
    mirror: Mirror,
    vcs: &'a dyn VersionControl,
    cipher: &'a dyn Encryptor,
    confirm: &'a dyn Confirm,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        paths: &'a Paths,
        settings: &'a Settings,
        vcs: &'a dyn VersionControl,
        cipher: &'a dyn Encryptor,
        confirm: &'a dyn Confirm,
    ) -> Self {
        Self {
            paths,
            settings,
            mirror: Mirror::new(paths.mirror()),
            vcs,
            cipher,
            confirm,
        }
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    /// Encrypt a working file into the mirror.
    ///
    /// Targets every key in the project's recipient list as it stands now
    /// and replaces any previous artifact. Nothing is committed.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::FileNotFound` if the working file is missing and
    /// `ConfigError::NoRecipients` if no recipient list exists.
    pub fn encrypt(&self, project: &Project, file: &str) -> Result<PathBuf> {
        let plaintext_path = project.working_file(file);
        if !plaintext_path.is_file() {
            return Err(SyncError::FileNotFound(plaintext_path).into());
        }

        let recipients = RecipientList::load(project.root(), self.paths)?;
        let keys = recipients.keys();
        debug!(
            list = %recipients.path().display(),
            keys = keys.len(),
            cipher = self.cipher.name(),
            "encrypting"
        );

        let artifact = self.mirror.artifact(project.name(), file)?;
        fs::create_dir_all(self.mirror.project_dir(project.name()))?;

        let plaintext = Zeroizing::new(fs::read(&plaintext_path)?);
        let ciphertext = self.cipher.encrypt(&plaintext, &keys)?;
        fs::write(&artifact, ciphertext)?;

        info!(artifact = %artifact.display(), "encrypted");
        Ok(artifact)
    }

    /// Decrypt an artifact into a fresh temporary file.
    ///
    /// Returns `None` with a warning if the artifact does not exist. The
    /// temporary file is removed when the returned handle is dropped.
    pub fn decrypt(&self, project: &Project, file: &str) -> Result<Option<NamedTempFile>> {
        let artifact = self.mirror.artifact(project.name(), file)?;
        if !artifact.is_file() {
            warn!(artifact = %artifact.display(), "no encrypted copy in mirror");
            return Ok(None);
        }

        let identity = self.settings.privkey_path(self.paths);
        debug!(identity = %identity.display(), "decrypting");

        let ciphertext = fs::read(&artifact)?;
        let plaintext = self.cipher.decrypt(&ciphertext, &identity)?;

        let mut temp = NamedTempFile::new()?;
        temp.write_all(&plaintext)?;
        temp.flush()?;
        Ok(Some(temp))
    }

    /// Compare a working file's mtime with its artifact's last commit.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::FileNotFound` if either side is missing and
    /// `SyncError::NotTracked` if the artifact was never committed.
    pub fn compare(&self, project: &Project, file: &str) -> Result<Comparison> {
        let plaintext = project.working_file(file);
        let relative = self.mirror.relative(project.name(), file)?;
        let artifact = self.mirror.root().join(&relative);

        if !plaintext.is_file() {
            return Err(SyncError::FileNotFound(plaintext).into());
        }
        if !artifact.is_file() {
            return Err(SyncError::FileNotFound(artifact).into());
        }

        let remote = self
            .vcs
            .last_commit_time(&relative)?
            .ok_or(SyncError::NotTracked(artifact))?;
        let modified = fs::metadata(&plaintext)?.modified()?;
        let local = DateTime::<Utc>::from(modified).timestamp();

        let comparison = Comparison::new(local, remote);
        debug!(
            file,
            local,
            remote,
            freshness = ?comparison.freshness(),
            "compared"
        );
        Ok(comparison)
    }

    /// Show the commit history of a file's artifact.
    pub fn history(&self, project: &Project, file: &str) -> Result<()> {
        self.mirror.ensure_exists()?;
        let relative = self.mirror.relative(project.name(), file)?;
        self.vcs.log(&relative)
    }

    /// Decrypted artifact content, or `FileNotFound` if there is none.
    fn remote_content(&self, project: &Project, file: &str) -> Result<Zeroizing<Vec<u8>>> {
        let artifact = self.mirror.artifact(project.name(), file)?;
        let temp = self
            .decrypt(project, file)?
            .ok_or(SyncError::FileNotFound(artifact))?;
        Ok(Zeroizing::new(fs::read(temp.path())?))
    }
}

/// Outcome of a freshness check where a missing or untracked artifact is
/// an answer rather than an error.
fn comparable(result: Result<Comparison>) -> Result<Option<Comparison>> {
    use crate::error::Error;

    match result {
        Ok(comparison) => Ok(Some(comparison)),
        Err(Error::Sync(SyncError::FileNotFound(path))) => {
            debug!(path = %path.display(), "not comparable, file missing");
            Ok(None)
        }
        Err(Error::Sync(SyncError::NotTracked(path))) => {
            debug!(path = %path.display(), "not comparable, never committed");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
