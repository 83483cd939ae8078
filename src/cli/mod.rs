//! Command-line interface.

pub mod addkeys;
pub mod commit;
pub mod completions;
pub mod forge;
pub mod init;
pub mod log;
pub mod output;
pub mod privkey;
pub mod update;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::{Paths, Settings};
use crate::core::confirm::{AssumeYes, Confirm, TerminalConfirm};
use crate::error::Result;

/// Envsync - share encrypted .env files with your team through git.
#[derive(Parser)]
#[command(
    name = "envsync",
    about = "Share age-encrypted .env files with your team through a git repository",
    version
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Clone the shared repository into ~/.envsync/repo
    Init {
        /// Remote URL of the shared repository
        url: String,
    },

    /// Set the private key used for decryption
    Privkey {
        /// Path to an age identity file or unencrypted OpenSSH key
        path: PathBuf,
    },

    /// Pull encrypted files into the current project
    #[command(visible_alias = "up")]
    Update {
        /// Also consider files that are newer locally
        #[arg(short, long)]
        force: bool,

        /// Same as --force
        #[arg(value_parser = ["force"], hide = true)]
        mode: Option<String>,
    },

    /// Set the forge used to look up public keys
    Forge {
        /// Hostname, e.g. github.com
        hostname: String,
    },

    /// Add recipients to the project's recipient list
    Addkeys {
        /// Public keys or forge usernames
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Encrypt a file, commit it to the mirror and push
    Commit {
        /// Working file, relative to the project root
        file: String,
        /// Commit message
        message: Option<String>,
    },

    /// Show the history of a file's encrypted copy
    Log {
        /// Working file, relative to the project root
        file: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every command.
pub struct Context {
    pub paths: Paths,
    pub settings: Settings,
    pub verbose: bool,
    confirm: Box<dyn Confirm>,
}

impl Context {
    /// Resolve the tool home and load settings.
    pub fn load(verbose: bool, yes: bool) -> Result<Self> {
        let paths = Paths::from_home()?;
        let settings = Settings::load(&paths)?;
        let confirm: Box<dyn Confirm> = if yes {
            Box::new(AssumeYes)
        } else {
            Box::new(TerminalConfirm)
        };
        Ok(Self {
            paths,
            settings,
            verbose,
            confirm,
        })
    }

    pub fn confirm(&self) -> &dyn Confirm {
        self.confirm.as_ref()
    }
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> Result<()> {
    use Command::*;

    match command {
        Init { url } => init::execute(ctx, &url),
        Privkey { path } => privkey::execute(ctx, &path),
        Update { force, mode } => update::execute(ctx, force || mode.is_some()),
        Forge { hostname } => forge::execute(ctx, &hostname),
        Addkeys { tokens } => addkeys::execute(ctx, &tokens),
        Commit { file, message } => commit::execute(ctx, &file, message.as_deref()),
        Log { file } => log::execute(ctx, &file),
        Completions { shell } => completions::execute(shell),
    }
}
