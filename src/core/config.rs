//! Settings and tool paths.
//!
//! Handles `~/.envsync/config.toml` and the locations derived from the
//! tool home. Settings are loaded once per invocation and passed by
//! reference into every operation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Locations under the tool home directory.
#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
    home: PathBuf,
}

impl Paths {
    /// Resolve paths from the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(&home))
    }

    /// Paths rooted at an explicit home directory.
    pub fn new(home: &Path) -> Self {
        Self {
            root: home.join(constants::HOME_DIR),
            home: home.to_path_buf(),
        }
    }

    /// The tool home (`~/.envsync`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(constants::CONFIG_FILE)
    }

    /// Local mirror of the shared repository.
    pub fn mirror(&self) -> PathBuf {
        self.root.join(constants::MIRROR_DIR)
    }

    /// User-global fallback recipient list.
    pub fn global_recipients(&self) -> PathBuf {
        self.root.join(constants::GLOBAL_RECIPIENTS_FILE)
    }

    /// Private key used when none is configured.
    pub fn default_privkey(&self) -> PathBuf {
        self.home.join(constants::DEFAULT_PRIVKEY)
    }
}

/// Persistent settings stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Forge hostname used to build key lookup URLs.
    #[serde(default = "default_forge")]
    pub forge: String,
    /// Private key used for every decrypt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privkey: Option<PathBuf>,
}

fn default_forge() -> String {
    constants::DEFAULT_FORGE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            forge: default_forge(),
            privkey: None,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn load(paths: &Paths) -> Result<Self> {
        let path = paths.config_file();
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(settings)
    }

    /// Write settings, creating the tool home if needed.
    pub fn save(&self, paths: &Paths) -> Result<()> {
        debug!("saving settings");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::create_dir_all(paths.root())?;
        fs::write(paths.config_file(), contents)?;
        Ok(())
    }

    /// Private key to decrypt with: the linked one, else the default.
    pub fn privkey_path(&self, paths: &Paths) -> PathBuf {
        self.privkey
            .clone()
            .unwrap_or_else(|| paths.default_privkey())
    }
}
