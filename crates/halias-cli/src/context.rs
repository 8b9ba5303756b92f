//! Resolved locations for a CLI invocation.

use std::path::{Path, PathBuf};

use halias_core::util::resolver::{VAULT_MARKERS, VaultResolver};
use halias_core::{Error, JsonFileStore, Result, SettingsStore};

/// Application name used for environment variables and the config directory.
pub const APP_NAME: &str = "halias";

/// Where the vault and the settings file are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    vault: Option<PathBuf>,
    data_file: PathBuf,
}

impl Context {
    /// Resolve from the `--vault` and `--data-file` flags.
    pub fn resolve(vault: Option<&str>, data_file: Option<&str>) -> Result<Self> {
        let resolver = VaultResolver::new(APP_NAME)
            .with_vault(vault)
            .with_data_file(data_file)
            .with_markers(VAULT_MARKERS);
        Self::from_resolver(&resolver)
    }

    /// Resolve with a prepared resolver.
    pub fn from_resolver(resolver: &VaultResolver) -> Result<Self> {
        let vault = resolver.vault_root();
        let data_file = resolver
            .data_file(vault.as_deref())
            .ok_or_else(|| Error::config("Could not determine a settings file location"))?;
        log::debug!(
            "Vault: {:?}, settings: {}",
            vault.as_ref().map(|v| v.display().to_string()),
            data_file.display()
        );
        Ok(Self { vault, data_file })
    }

    /// Build a context from known paths.
    pub fn new(vault: Option<PathBuf>, data_file: impl Into<PathBuf>) -> Self {
        Self {
            vault,
            data_file: data_file.into(),
        }
    }

    /// The vault root, if one was found.
    pub fn vault(&self) -> Option<&Path> {
        self.vault.as_deref()
    }

    /// The vault root, or an error explaining how to name one.
    pub fn require_vault(&self) -> Result<&Path> {
        self.vault().ok_or_else(|| {
            Error::config(
                "No vault found. Pass --vault, set HALIAS_VAULT, or run inside a directory containing .halias or .obsidian",
            )
        })
    }

    /// The settings file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the settings store backed by the settings file.
    pub fn settings_store(&self) -> SettingsStore<JsonFileStore> {
        SettingsStore::load(JsonFileStore::new(&self.data_file))
    }
}
