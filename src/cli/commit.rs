//! Commit command - encrypt, commit and push one file.

use crate::cli::{output, Context};
use crate::core::cipher::Age;
use crate::core::engine::{CommitOutcome, SyncEngine};
use crate::core::git::Git;
use crate::core::project::Project;
use crate::error::Result;

pub fn execute(ctx: &Context, file: &str, message: Option<&str>) -> Result<()> {
    let project = Project::current(&ctx.paths)?;
    let git = Git::new(ctx.paths.mirror())?;
    let engine = SyncEngine::new(&ctx.paths, &ctx.settings, &git, &Age, ctx.confirm());

    match engine.commit(&project, file, message)? {
        CommitOutcome::Committed { .. } => output::success(&format!("committed {}", file)),
        CommitOutcome::Declined => output::dimmed("aborted"),
    }
    Ok(())
}
