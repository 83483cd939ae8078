//! Push direction: encrypt a working file and publish it.

use std::fs;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{comparable, SyncEngine};
use crate::core::diff::ContentDiff;
use crate::core::freshness::Freshness;
use crate::core::project::Project;
use crate::error::{Result, SyncError};

/// How a commit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Encrypted, committed and pushed.
    Committed { message: String },
    /// The user declined to overwrite a newer remote.
    Declined,
}

impl SyncEngine<'_> {
    /// Encrypt `file`, commit the artifact and push the mirror.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Unchanged` if the artifact already holds the same
    /// content, and `RemoteError::Push` if the push fails after the local
    /// commit was made.
    pub fn commit(
        &self,
        project: &Project,
        file: &str,
        message: Option<&str>,
    ) -> Result<CommitOutcome> {
        let working = project.working_file(file);
        if !working.is_file() {
            return Err(SyncError::FileNotFound(working).into());
        }
        self.mirror.ensure_exists()?;
        self.vcs.pull()?;

        let artifact = self.mirror.artifact(project.name(), file)?;
        if artifact.is_file() {
            let remote = self.remote_content(project, file)?;
            let local = Zeroizing::new(fs::read(&working)?);
            let diff = ContentDiff::compute(
                &remote,
                &local,
                &format!("{} (remote)", file),
                &format!("{} (local)", file),
            );
            if diff.is_empty() {
                return Err(SyncError::Unchanged(file.to_string()).into());
            }

            let comparison = comparable(self.compare(project, file))?
                .filter(|c| c.freshness() == Freshness::RemoteNewerOrEqual);
            if let Some(comparison) = comparison {
                let prompt = format!(
                    "remote {} is not older than yours ({}), commit anyway?",
                    file,
                    comparison.describe()
                );
                if !self.confirm.confirm(&prompt, &diff)? {
                    debug!(file, "commit declined");
                    return Ok(CommitOutcome::Declined);
                }
            }
        }

        self.encrypt(project, file)?;

        let relative = self.mirror.relative(project.name(), file)?;
        let message = message
            .map(str::to_string)
            .unwrap_or_else(|| format!("update {}", file));

        self.vcs.add(&relative)?;
        self.vcs.commit(&message)?;
        self.vcs.push()?;

        info!(file, message = %message, "committed and pushed");
        Ok(CommitOutcome::Committed { message })
    }
}
