//! Forge command - choose where usernames are looked up.

use crate::cli::{output, Context};
use crate::error::Result;

pub fn execute(ctx: &Context, hostname: &str) -> Result<()> {
    let mut settings = ctx.settings.clone();
    settings.forge = hostname.trim().to_string();
    settings.save(&ctx.paths)?;

    output::success(&format!("forge set to {}", settings.forge));
    Ok(())
}
