//! Halias CLI
//!
//! Adds note headings to frontmatter aliases from the command line.

use anyhow::Result;
use clap::Parser;
use halias_cli::commands::{cmd_commands, cmd_sync};
use halias_cli::settings_handlers::{handle_ignore_command, handle_settings_command};
use halias_cli::{Cli, Command, ConsoleNotifier, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli, "Parsed arguments");

    let ctx = Context::resolve(cli.vault.as_deref(), cli.data_file.as_deref())?;
    match cli.command {
        Command::Sync { files, dry_run } => {
            cmd_sync(&ctx, &files, dry_run, ConsoleNotifier)?;
        }
        Command::Settings { action } => handle_settings_command(&ctx, action, ConsoleNotifier)?,
        Command::Ignore { action } => handle_ignore_command(&ctx, action, ConsoleNotifier)?,
        Command::Commands => cmd_commands()?,
    }

    Ok(())
}
