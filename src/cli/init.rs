//! Init command - clone the shared repository into the mirror.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::git::{Git, VersionControl};
use crate::error::{ConfigError, Result};

/// Clone `url` into `~/.envsync/repo`.
pub fn execute(ctx: &Context, url: &str) -> Result<()> {
    let mirror = ctx.paths.mirror();
    if mirror.exists() {
        return Err(ConfigError::AlreadyInitialized(mirror).into());
    }

    info!(url, "initializing mirror");
    Git::new(mirror.clone())?.clone_from(url)?;

    output::success(&format!("cloned {} into {}", url, output::path(mirror.display())));
    Ok(())
}
