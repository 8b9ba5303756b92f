//! Handler functions for the `sync` and `commands` CLI commands.

use std::path::{Path, PathBuf};

use halias_content::Vault;
use halias_core::command::HEADING_TO_ALIAS;
use halias_core::notice::LogNotifier;
use halias_core::{
    CommandOutcome, CommandRegistry, Error, HeadingAliasesPlugin, JsonFileStore, MemoryHost,
    MemoryStore, Notifier, Result,
};

use crate::context::Context;

/// Result of syncing one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteResult {
    /// Note as named on the command line.
    pub file: PathBuf,
    /// What the command did.
    pub outcome: CommandOutcome,
}

/// Run the heading-to-alias command on each of `files` in turn.
///
/// Each file becomes the active note before the command runs, exactly as if
/// the user had opened it. Stops at the first error.
pub fn cmd_sync<N: Notifier>(
    ctx: &Context,
    files: &[PathBuf],
    dry_run: bool,
    notifier: N,
) -> Result<Vec<NoteResult>> {
    let vault = Vault::open(ctx.require_vault()?)?.with_dry_run(dry_run);
    let mut plugin =
        HeadingAliasesPlugin::load(vault, JsonFileStore::new(ctx.data_file()), notifier);

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let note = plugin.host_mut().open_note(file)?;
        if files.len() > 1 {
            println!("{}", display_path(plugin.host().root(), &note));
        }
        let outcome = plugin
            .run(HEADING_TO_ALIAS)
            .ok_or_else(|| Error::not_found(format!("command '{HEADING_TO_ALIAS}'")))??;
        if outcome == CommandOutcome::Skipped {
            log::info!("Nothing to do for {}", file.display());
        }
        results.push(NoteResult {
            file: file.clone(),
            outcome,
        });
    }
    plugin.host_mut().close_note();

    if plugin.host().is_dry_run() {
        println!("(dry run: no notes were written)");
    }
    Ok(results)
}

/// Print the registered commands as `id<TAB>name`.
pub fn cmd_commands() -> Result<()> {
    let plugin = HeadingAliasesPlugin::load(MemoryHost::new(), MemoryStore::default(), LogNotifier);
    for command in plugin.commands() {
        println!("{}\t{}", command.id, command.name);
    }
    Ok(())
}

fn display_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).display().to_string()
}
