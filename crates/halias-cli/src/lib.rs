//! # halias-cli
//!
//! Command-line front end for Halias.
//!
//! This crate provides the `halias` binary:
//! - `sync`: add note headings to frontmatter aliases
//! - `settings`: inspect and change the stored settings
//! - `ignore`: manage ignored headings
//! - `commands`: list registered commands
//!
//! The handlers are public so other front ends can reuse them.

pub mod cli;
pub mod commands;
pub mod context;
pub mod notifier;
pub mod settings_handlers;

pub use cli::{Cli, Command, IgnoreAction, SettingsAction};
pub use context::Context;
pub use notifier::ConsoleNotifier;
