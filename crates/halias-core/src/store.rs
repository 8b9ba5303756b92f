//! Settings persistence.
//!
//! [`SettingsStore`] owns the in-memory [`Settings`] and writes the whole
//! record to a [`DataStore`] after every mutation. The data store is the
//! host's generic key-value persistence; two implementations are provided:
//!
//! - [`JsonFileStore`]: a pretty-printed JSON file on disk
//! - [`MemoryStore`]: an in-memory value, for tests and embedding
//!
//! # Example
//!
//! ```rust
//! use halias_core::store::{MemoryStore, SettingsStore};
//! use halias_core::settings::IgnoreOutcome;
//!
//! let mut store = SettingsStore::load(MemoryStore::default());
//! let outcome = store.add_ignored_heading("Summary").unwrap();
//! assert_eq!(outcome, IgnoreOutcome::Added("summary".to_string()));
//! assert_eq!(store.backend().save_count(), 1);
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::settings::{IgnoreOutcome, Settings};

// ============================================================================
// DataStore
// ============================================================================

/// Host persistence for the extension's data record.
pub trait DataStore {
    /// Read the stored record, or `None` if nothing was ever saved.
    fn load_data(&self) -> Result<Option<Value>>;

    /// Replace the stored record with `data`.
    fn save_data(&mut self, data: &Value) -> Result<()>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file and its parent directories are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for JsonFileStore {
    fn load_data(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| Error::io_with_path(e, &self.path))?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    fn save_data(&mut self, data: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json).map_err(|e| Error::io_with_path(e, &self.path))?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-memory data record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<Value>,
    saves: usize,
}

impl MemoryStore {
    /// Create a store that already holds `data`.
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            saves: 0,
        }
    }

    /// The currently stored record.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Number of times the record was written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for MemoryStore {
    fn load_data(&self) -> Result<Option<Value>> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, data: &Value) -> Result<()> {
        self.data = Some(data.clone());
        self.saves += 1;
        Ok(())
    }
}

// ============================================================================
// SettingsStore
// ============================================================================

/// In-memory settings bound to a [`DataStore`].
#[derive(Debug)]
pub struct SettingsStore<B> {
    backend: B,
    settings: Settings,
}

impl<B: DataStore> SettingsStore<B> {
    /// Load settings from `backend`.
    ///
    /// Never fails. A missing or unreadable record yields defaults; a
    /// stored record keeps every field that parses (see
    /// [`Settings::from_record`]).
    pub fn load(backend: B) -> Self {
        let settings = match backend.load_data() {
            Ok(Some(value)) => Settings::from_record(value),
            Ok(None) => {
                log::debug!("No stored settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                log::warn!("Failed to read settings, using defaults: {e}");
                Settings::default()
            }
        };
        Self { backend, settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The underlying data store.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the full settings record, overwriting what was stored.
    pub fn save(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.settings)?;
        self.backend.save_data(&value)
    }

    /// Change settings through `f`, then save.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.settings);
        self.save()
    }

    /// Add a heading to the ignore list.
    ///
    /// Saves only when the entry was actually added.
    pub fn add_ignored_heading(&mut self, text: &str) -> Result<IgnoreOutcome> {
        let outcome = self.settings.ignored_headings.insert(text);
        match &outcome {
            IgnoreOutcome::Added(entry) => {
                log::info!("Ignoring heading \"{entry}\"");
                self.save()?;
            }
            IgnoreOutcome::AlreadyPresent(entry) => {
                log::debug!("Heading \"{entry}\" is already ignored");
            }
            IgnoreOutcome::Blank => {}
        }
        Ok(outcome)
    }

    /// Remove a heading from the ignore list and save.
    ///
    /// Returns the removed entry, or `None` if it was not listed.
    pub fn remove_ignored_heading(&mut self, text: &str) -> Result<Option<String>> {
        let removed = self.settings.ignored_headings.remove(text);
        if let Some(entry) = &removed {
            log::info!("Removed ignore rule for \"{entry}\"");
        }
        self.save()?;
        Ok(removed)
    }
}

// ============================================================================
// Tests
// ============================================================================
