//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Add note headings to frontmatter aliases
#[derive(Parser, Debug)]
#[command(name = "halias")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Vault root (defaults to the nearest directory containing .halias or .obsidian)
    #[arg(long, env = "HALIAS_VAULT", global = true)]
    pub vault: Option<String>,

    /// Settings file (defaults to <vault>/.halias/data.json)
    #[arg(long, env = "HALIAS_DATA_FILE", global = true)]
    pub data_file: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add the headings of each note to its aliases
    Sync {
        /// Notes to update, relative to the working directory or the vault
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report what would be added without writing notes
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect or change settings
    Settings {
        /// Settings action
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Manage ignored headings
    Ignore {
        /// Ignore-list action
        #[command(subcommand)]
        action: IgnoreAction,
    },

    /// List the commands the plugin registers
    Commands,
}

/// `halias settings` subcommands.
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show the resolved settings file path
    Path,
    /// Print all settings as JSON
    Show,
    /// Print one setting
    Get {
        /// Setting name, e.g. maxHeadingDepth
        key: String,
    },
    /// Change one setting
    Set {
        /// Setting name, e.g. addLowerCaseDuplicate
        key: String,
        /// New value (true/false, a number, or text)
        value: String,
    },
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// `halias ignore` subcommands.
#[derive(Subcommand, Debug)]
pub enum IgnoreAction {
    /// Never add this heading as an alias
    Add {
        /// Heading text (matched case-insensitively)
        heading: String,
    },
    /// Remove an ignore rule
    Remove {
        /// Heading text
        heading: String,
    },
    /// List ignored headings
    List,
}
