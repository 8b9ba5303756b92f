//! Plugin orchestration.
//!
//! [`HeadingAliasesPlugin`] ties the pieces together: it owns the settings
//! store, borrows the host services, and posts notices for every user-visible
//! outcome.

use crate::command::{
    CommandInfo, CommandOutcome, CommandRegistry, HEADING_TO_ALIAS, HEADING_TO_ALIAS_NAME,
    SyncReport,
};
use crate::error::Result;
use crate::host::{FrontmatterEditor, MetadataCache, Workspace};
use crate::intent::{IntentOutcome, SettingsIntent};
use crate::notice::{Notice, Notifier, SHORT_NOTICE};
use crate::settings::Settings;
use crate::store::{DataStore, SettingsStore};
use crate::sync::synchronize;

/// The heading-to-alias plugin bound to a host.
pub struct HeadingAliasesPlugin<H, B, N> {
    host: H,
    store: SettingsStore<B>,
    notifier: N,
}

impl<H, B, N> HeadingAliasesPlugin<H, B, N>
where
    H: Workspace + MetadataCache + FrontmatterEditor,
    B: DataStore,
    N: Notifier,
{
    /// Load settings from `backend` and bind to `host`.
    pub fn load(host: H, backend: B, notifier: N) -> Self {
        Self {
            host,
            store: SettingsStore::load(backend),
            notifier,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// The settings store.
    pub fn store(&self) -> &SettingsStore<B> {
        &self.store
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably (e.g. to switch the active note).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Merge the active note's headings into its `aliases` frontmatter.
    ///
    /// Returns [`CommandOutcome::Skipped`] without a notice when there is no
    /// active note, the host has no metadata for it, or it has no headings.
    pub fn heading_to_aliases(&mut self) -> Result<CommandOutcome> {
        let Some(document) = self.host.active_document() else {
            log::debug!("No active document");
            return Ok(CommandOutcome::Skipped);
        };
        let Some(cache) = self.host.file_cache(&document)? else {
            log::debug!("No cached metadata for {}", document.display());
            return Ok(CommandOutcome::Skipped);
        };
        let Some(headings) = cache.non_empty_headings() else {
            log::debug!("No headings in {}", document.display());
            return Ok(CommandOutcome::Skipped);
        };

        let settings = self.store.settings();
        let mut added = 0;
        self.host.process_aliases(&document, &mut |aliases| {
            added = synchronize(headings, aliases, settings);
        })?;

        log::info!("Added {added} aliases to {}", document.display());
        self.notifier.notify(
            Notice::new(format!("Added {added} new aliases to this file.")).with_timeout(SHORT_NOTICE),
        );
        Ok(CommandOutcome::Synced(SyncReport { document, added }))
    }

    /// Apply a settings change and post its notice, if it has one.
    pub fn apply(&mut self, intent: SettingsIntent) -> Result<IntentOutcome> {
        let outcome = self.store.apply(intent)?;
        if let Some(notice) = outcome.notice() {
            self.notifier.notify(notice);
        }
        Ok(outcome)
    }
}

impl<H, B, N> CommandRegistry for HeadingAliasesPlugin<H, B, N>
where
    H: Workspace + MetadataCache + FrontmatterEditor,
    B: DataStore,
    N: Notifier,
{
    fn commands(&self) -> Vec<CommandInfo> {
        vec![CommandInfo::new(HEADING_TO_ALIAS, HEADING_TO_ALIAS_NAME)]
    }

    fn run(&mut self, id: &str) -> Option<Result<CommandOutcome>> {
        match id {
            HEADING_TO_ALIAS => Some(self.heading_to_aliases()),
            _ => None,
        }
    }
}
