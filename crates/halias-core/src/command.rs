//! Command registration and dispatch.
//!
//! The host lists the commands a plugin offers (for a palette, menu, or CLI)
//! and dispatches the one the user picks by id.

use std::path::PathBuf;

use crate::error::Result;

/// Id of the heading-to-alias command.
pub const HEADING_TO_ALIAS: &str = "heading-to-alias";

/// Display name of the heading-to-alias command.
pub const HEADING_TO_ALIAS_NAME: &str = "Add file headings to frontmatter alias list";

/// A command as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Stable identifier used for dispatch.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl CommandInfo {
    /// Create command info.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Summary of one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Note that was updated.
    pub document: PathBuf,
    /// Number of aliases appended.
    pub added: usize,
}

/// What running a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing to do: no active note, no cached metadata, or no headings.
    Skipped,
    /// The note's aliases were synchronized.
    Synced(SyncReport),
}

/// Registers and dispatches commands.
pub trait CommandRegistry {
    /// All commands offered, in display order.
    fn commands(&self) -> Vec<CommandInfo>;

    /// Run the command with `id`.
    ///
    /// Returns `None` if the id is not recognized by this registry.
    fn run(&mut self, id: &str) -> Option<Result<CommandOutcome>>;

    /// Returns the number of registered commands.
    fn command_count(&self) -> usize {
        self.commands().len()
    }

    /// Check if a command exists by id.
    fn has_command(&self, id: &str) -> bool {
        self.commands().iter().any(|c| c.id == id)
    }
}
