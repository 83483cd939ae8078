//! Addkeys command - append recipients to the project's list.

use tracing::info;

use crate::cli::Context;
use crate::core::forge::HttpKeyFetcher;
use crate::core::project::Project;
use crate::core::recipients;
use crate::error::Result;

/// Resolve `tokens`, append them and print the resulting list.
pub fn execute(ctx: &Context, tokens: &[String]) -> Result<()> {
    let project = Project::current(&ctx.paths)?;

    let fetcher = HttpKeyFetcher::new();
    let lines = recipients::resolve_tokens(tokens, &ctx.settings.forge, &fetcher);
    info!(tokens = tokens.len(), lines = lines.len(), "adding recipients");

    let contents = recipients::append(project.root(), &lines)?;
    print!("{}", contents);
    Ok(())
}
