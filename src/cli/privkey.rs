//! Privkey command - choose the key used for decryption.

use std::path::Path;

use crate::cli::{output, Context};
use crate::error::{ConfigError, Result};

/// Store the absolute path of `path` as the private key.
pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .map_err(|_| ConfigError::KeyNotFound(path.to_path_buf()))?;
    if !absolute.is_file() {
        return Err(ConfigError::KeyNotFound(absolute).into());
    }

    let mut settings = ctx.settings.clone();
    settings.privkey = Some(absolute.clone());
    settings.save(&ctx.paths)?;

    output::success(&format!("private key set to {}", output::path(absolute.display())));
    Ok(())
}
