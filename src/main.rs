//! Envsync - share encrypted .env files with your team through git.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envsync::cli::output;
use envsync::cli::{execute, Cli, Context};
use envsync::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("ENVSYNC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envsync=debug")
        } else {
            EnvFilter::new("envsync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let result = Context::load(cli.verbose, cli.yes).and_then(|ctx| execute(command, &ctx));
    if let Err(e) = result {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized(_)) => Some("run: envsync init <remote-url>"),
            Error::Config(ConfigError::NoRecipients { .. }) => Some("run: envsync addkeys <user>"),
            Error::Config(ConfigError::NotProjectRoot(_)) => {
                Some("run envsync from the top of your project's git checkout")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
