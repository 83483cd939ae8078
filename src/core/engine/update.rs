//! Pull direction: bring working files up to date with the mirror.

use std::fs;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{comparable, SyncEngine};
use crate::core::diff::ContentDiff;
use crate::core::freshness::Freshness;
use crate::core::project::Project;
use crate::error::{Result, SyncError};

/// What happened to one file during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The working file was written from the mirror.
    Updated,
    /// Working file and artifact already match.
    Unchanged,
    /// The working file is newer than the last commit; left alone.
    Skipped,
    /// The user chose to keep the working file.
    Declined,
}

/// Per-file update result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub status: FileStatus,
}

impl FileReport {
    fn new(file: &str, status: FileStatus) -> Self {
        Self {
            file: file.to_string(),
            status,
        }
    }
}

impl SyncEngine<'_> {
    /// Update every working file that has an artifact in the mirror.
    ///
    /// Refreshes the mirror first. Missing working files are always
    /// written. Existing ones are only considered when the remote is at
    /// least as recent, the two cannot be compared, or `force` is set; a
    /// real difference is then confirmed before overwriting.
    pub fn update(&self, project: &Project, force: bool) -> Result<Vec<FileReport>> {
        let mut reports = Vec::new();
        self.update_with(project, force, &mut |report: &FileReport| {
            reports.push(report.clone())
        })?;
        Ok(reports)
    }

    /// Like [`SyncEngine::update`], handing each report to `on_report` as
    /// soon as its file is settled.
    ///
    /// Stops at the first failing file. Files settled before it have
    /// already been reported, so callers can show what was written.
    pub fn update_with(
        &self,
        project: &Project,
        force: bool,
        on_report: &mut dyn FnMut(&FileReport),
    ) -> Result<()> {
        self.mirror.ensure_exists()?;
        self.vcs.pull()?;

        let files = self.mirror.artifacts(project.name())?;
        debug!(project = project.name(), files = files.len(), force, "updating");

        for file in &files {
            let report = self.update_file(project, file, force)?;
            on_report(&report);
        }
        Ok(())
    }

    fn update_file(&self, project: &Project, file: &str, force: bool) -> Result<FileReport> {
        let working = project.working_file(file);

        if !working.exists() {
            let artifact = self.mirror.artifact(project.name(), file)?;
            let temp = self
                .decrypt(project, file)?
                .ok_or(SyncError::FileNotFound(artifact))?;
            fs::copy(temp.path(), &working)?;
            info!(file, "created from mirror");
            return Ok(FileReport::new(file, FileStatus::Updated));
        }

        let freshness = comparable(self.compare(project, file))?.map(|c| c.freshness());
        if freshness == Some(Freshness::LocalNewer) && !force {
            return Ok(FileReport::new(file, FileStatus::Skipped));
        }

        let remote = self.remote_content(project, file)?;
        let local = Zeroizing::new(fs::read(&working)?);
        let diff = ContentDiff::compute(
            &local,
            &remote,
            &format!("{} (local)", file),
            &format!("{} (remote)", file),
        );
        if diff.is_empty() {
            debug!(file, "unchanged");
            return Ok(FileReport::new(file, FileStatus::Unchanged));
        }

        let prompt = format!("overwrite {} with the remote version?", file);
        if !self.confirm.confirm(&prompt, &diff)? {
            return Ok(FileReport::new(file, FileStatus::Declined));
        }

        fs::write(&working, &*remote)?;
        info!(file, "updated from mirror");
        Ok(FileReport::new(file, FileStatus::Updated))
    }
}
