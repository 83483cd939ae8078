//! Mirror layout.
//!
//! Every encrypted artifact lives at `<mirror>/<project>/<file>.age`;
//! nothing is nested deeper.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Local checkout of the shared repository.
#[derive(Debug, Clone)]
pub struct Mirror {
    root: PathBuf,
}

impl Mirror {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the mirror has been cloned.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Fail with `ConfigError::NotInitialized` unless the mirror exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.exists() {
            return Err(ConfigError::NotInitialized(self.root.clone()).into());
        }
        Ok(())
    }

    /// Artifact path relative to the mirror root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFileName` unless `file` is a single
    /// plain path component.
    pub fn relative(&self, project: &str, file: &str) -> Result<PathBuf> {
        validate_name(project)?;
        validate_name(file)?;
        Ok(Path::new(project).join(format!("{}.{}", file, constants::ARTIFACT_EXT)))
    }

    /// Absolute artifact path.
    pub fn artifact(&self, project: &str, file: &str) -> Result<PathBuf> {
        Ok(self.root.join(self.relative(project, file)?))
    }

    /// Directory holding a project's artifacts.
    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.root.join(project)
    }

    /// Working file names of every artifact stored for `project`, sorted.
    pub fn artifacts(&self, project: &str) -> Result<Vec<String>> {
        let dir = self.project_dir(project);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let suffix = format!(".{}", constants::ARTIFACT_EXT);
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(stem) = name.strip_suffix(&suffix) {
                if !stem.is_empty() {
                    files.push(stem.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigError::InvalidFileName(name.to_string()).into()),
    }
}
