//! Log command - show a file's history in the mirror.

use crate::cli::Context;
use crate::core::cipher::Age;
use crate::core::engine::SyncEngine;
use crate::core::git::Git;
use crate::core::project::Project;
use crate::error::Result;

pub fn execute(ctx: &Context, file: &str) -> Result<()> {
    let project = Project::current(&ctx.paths)?;
    let git = Git::new(ctx.paths.mirror())?;
    let engine = SyncEngine::new(&ctx.paths, &ctx.settings, &git, &Age, ctx.confirm());
    engine.history(&project, file)
}
