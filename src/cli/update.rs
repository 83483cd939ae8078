//! Update command - pull encrypted files into the project.

use crate::cli::{output, Context};
use crate::core::cipher::Age;
use crate::core::engine::{FileReport, FileStatus, SyncEngine};
use crate::core::git::Git;
use crate::core::project::Project;
use crate::error::Result;

pub fn execute(ctx: &Context, force: bool) -> Result<()> {
    let project = Project::current(&ctx.paths)?;
    let git = Git::new(ctx.paths.mirror())?;
    let engine = SyncEngine::new(&ctx.paths, &ctx.settings, &git, &Age, ctx.confirm());

    // Reports print as files settle so a later failure does not hide them.
    let mut seen = 0;
    engine.update_with(&project, force, &mut |report: &FileReport| {
        seen += 1;
        print_report(ctx, report);
    })?;

    if seen == 0 && ctx.verbose {
        output::dimmed(&format!("nothing stored for {}", project.name()));
    }
    Ok(())
}

fn print_report(ctx: &Context, report: &FileReport) {
    let file = report.file.as_str();
    match report.status {
        FileStatus::Updated => output::success(&format!("updated {}", file)),
        FileStatus::Skipped => output::warn(&format!("skip {}, newer than remote", file)),
        FileStatus::Declined => output::dimmed(&format!("kept local {}", file)),
        FileStatus::Unchanged if ctx.verbose => output::dimmed(&format!("unchanged {}", file)),
        FileStatus::Unchanged => {}
    }
}
