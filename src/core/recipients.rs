//! Recipient lists.
//!
//! A recipient list is a plain text file with one entry per line: public
//! keys, `#` comments, and an optional first-line `# repo=<name>`
//! directive. Lines are kept verbatim and in order; the list only grows
//! by appending.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::Paths;
use crate::core::constants;
use crate::core::forge::{self, KeyFetcher};
use crate::error::{ConfigError, Result};

/// Recipient list contents and where they came from.
#[derive(Debug, Clone)]
pub struct RecipientList {
    path: PathBuf,
    lines: Vec<String>,
}

impl RecipientList {
    /// Parse list contents read from `path`.
    pub fn parse(path: PathBuf, contents: &str) -> Self {
        Self {
            path,
            lines: contents.lines().map(str::to_string).collect(),
        }
    }

    /// Project-local list path for a project rooted at `root`.
    pub fn local_path(root: &Path) -> PathBuf {
        root.join(constants::RECIPIENTS_FILE)
    }

    /// Load the list for a project: the project-local file if present,
    /// else the user-global fallback.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoRecipients` if neither file exists.
    pub fn load(root: &Path, paths: &Paths) -> Result<Self> {
        Self::find(root, paths)?.ok_or_else(|| {
            ConfigError::NoRecipients {
                local: Self::local_path(root),
                global: paths.global_recipients(),
            }
            .into()
        })
    }

    /// Like [`RecipientList::load`] but a missing list is not an error.
    pub fn find(root: &Path, paths: &Paths) -> Result<Option<Self>> {
        for path in [Self::local_path(root), paths.global_recipients()] {
            if path.is_file() {
                debug!(path = %path.display(), "using recipient list");
                let contents = fs::read_to_string(&path)?;
                return Ok(Some(Self::parse(path, &contents)));
            }
        }
        Ok(None)
    }

    /// File the list was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Key entries: every line that is neither blank nor a comment.
    pub fn keys(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect()
    }

    /// Project name from a `# repo=<name>` directive on the first line.
    pub fn repo_name(&self) -> Option<&str> {
        self.lines
            .first()
            .and_then(|l| l.trim().strip_prefix(constants::REPO_DIRECTIVE))
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Whether a token is already a public key rather than a forge username.
pub fn is_raw_key(token: &str) -> bool {
    constants::KEY_PREFIXES.iter().any(|p| token.starts_with(p))
}

/// Expand tokens into recipient lines.
///
/// Raw keys pass through unchanged. Anything else is a forge username:
/// it yields a comment naming the lookup URL followed by every key the
/// forge returns, unvalidated.
pub fn resolve_tokens(
    tokens: &[String],
    forge_host: &str,
    fetcher: &dyn KeyFetcher,
) -> Vec<String> {
    let mut resolved = Vec::new();
    for token in tokens {
        if is_raw_key(token) {
            resolved.push(token.clone());
            continue;
        }
        let url = forge::keys_url(forge_host, token);
        resolved.push(format!("# {}", url));
        resolved.extend(fetcher.fetch(&url));
    }
    resolved
}

/// Append lines to the project-local list, creating it if needed.
///
/// Returns the full file contents after the append.
pub fn append(root: &Path, lines: &[String]) -> Result<String> {
    let path = RecipientList::local_path(root);
    debug!(path = %path.display(), count = lines.len(), "appending recipients");

    let existing = if path.exists() {
        fs::read_to_string(&path)?
    } else {
        String::new()
    };

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    for line in lines {
        writeln!(file, "{}", line)?;
    }

    Ok(fs::read_to_string(&path)?)
}
