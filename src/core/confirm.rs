//! Interactive confirmation.
//!
//! The engine asks before overwriting a working file or committing over a
//! newer remote. Prompting goes through [`Confirm`] so tests and
//! non-interactive runs can answer deterministically.

use console::style;
use dialoguer::Confirm as Prompt;

use crate::core::diff::ContentDiff;
use crate::error::Result;

/// Yes/no decision about a pending change.
pub trait Confirm {
    /// Ask `prompt` about the change described by `diff`.
    fn confirm(&self, prompt: &str, diff: &ContentDiff) -> Result<bool>;
}

/// Terminal prompt: prints the diff, then asks (default no).
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str, diff: &ContentDiff) -> Result<bool> {
        for line in diff.unified().lines() {
            let styled = match line.chars().next() {
                Some('+') if !line.starts_with("+++") => style(line).green(),
                Some('-') if !line.starts_with("---") => style(line).red(),
                Some('@') => style(line).cyan(),
                _ => style(line).dim(),
            };
            eprintln!("{}", styled);
        }

        Prompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(Into::into)
    }
}

/// Answers yes to everything (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, prompt: &str, _diff: &ContentDiff) -> Result<bool> {
        tracing::debug!(prompt, "assuming yes");
        Ok(true)
    }
}
