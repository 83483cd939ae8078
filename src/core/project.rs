//! Project identity.
//!
//! A project is the git working tree the command runs in. Its name keys
//! the project's directory in the mirror.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::Paths;
use crate::core::recipients::RecipientList;
use crate::error::{ConfigError, Result};

/// A project working tree and its mirror name.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    name: String,
}

impl Project {
    /// A project with an explicit name.
    pub fn new(root: PathBuf, name: String) -> Self {
        Self { root, name }
    }

    /// Open the project rooted at the current directory.
    pub fn current(paths: &Paths) -> Result<Self> {
        Self::open(&std::env::current_dir()?, paths)
    }

    /// Open the project rooted at `root`.
    ///
    /// The name comes from a `# repo=<name>` directive in the
    /// project-local recipient list, else from the directory name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotProjectRoot` unless `root` is the top of a
    /// git working tree.
    pub fn open(root: &Path, paths: &Paths) -> Result<Self> {
        if !root.join(".git").exists() {
            return Err(ConfigError::NotProjectRoot(root.to_path_buf()).into());
        }

        let directive = RecipientList::find(root, paths)?
            .filter(|list| list.path() == RecipientList::local_path(root).as_path())
            .and_then(|list| list.repo_name().map(str::to_string));

        let name = directive.unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "default".to_string())
        });

        debug!(root = %root.display(), name = %name, "opened project");
        Ok(Self {
            root: root.to_path_buf(),
            name,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of a working file.
    pub fn working_file(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}
