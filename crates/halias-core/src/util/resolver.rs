//! Vault root and settings file resolution.
//!
//! `VaultResolver` locates the vault a command operates on and the JSON file
//! that holds the plugin settings, using explicit paths, environment
//! variables, directory markers, and fallbacks.
//!
//! # Example
//!
//! ```no_run
//! use halias_core::util::resolver::VaultResolver;
//!
//! let resolver = VaultResolver::new("halias").with_markers(&[".halias", ".obsidian"]);
//!
//! // Checks HALIAS_VAULT, then walks up from the working directory
//! if let Some(vault) = resolver.vault_root() {
//!     println!("Vault: {:?}", vault);
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use crate::util::paths::{app_config_dir, expand_tilde, find_dir_with_marker};

/// Directory inside a vault that holds plugin data.
pub const DATA_DIR: &str = ".halias";

/// Name of the settings file.
pub const DATA_FILE_NAME: &str = "data.json";

/// Markers that identify a vault root, in priority order.
pub const VAULT_MARKERS: &[&str] = &[DATA_DIR, ".obsidian"];

/// Resolves the vault root and settings file for an application.
#[derive(Debug, Clone)]
pub struct VaultResolver {
    /// Application name (e.g., "halias")
    app_name: String,
    /// Environment variable prefix (e.g., "HALIAS")
    env_prefix: String,
    /// Vault path given on the command line
    vault: Option<PathBuf>,
    /// Settings file given on the command line
    data_file: Option<PathBuf>,
    /// Directory the marker search starts from; defaults to the working directory
    start_dir: Option<PathBuf>,
    /// Marker directories that identify a vault root
    markers: Vec<String>,
    /// Fallback vault root (expanded with tilde)
    fallback: Option<PathBuf>,
}

impl VaultResolver {
    /// Create a resolver for `app_name`.
    ///
    /// The name becomes the environment variable prefix:
    /// "halias" → "HALIAS", "my-notes" → "MY_NOTES".
    pub fn new(app_name: &str) -> Self {
        let env_prefix = app_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            app_name: app_name.to_string(),
            env_prefix,
            vault: None,
            data_file: None,
            start_dir: None,
            markers: vec![],
            fallback: None,
        }
    }

    /// Use an explicit vault path (supports ~ expansion).
    pub fn with_vault(mut self, path: Option<&str>) -> Self {
        self.vault = path.map(expand_tilde);
        self
    }

    /// Use an explicit settings file (supports ~ expansion).
    pub fn with_data_file(mut self, path: Option<&str>) -> Self {
        self.data_file = path.map(expand_tilde);
        self
    }

    /// Start the marker search from `dir` instead of the working directory.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Set marker directories that identify a vault root.
    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.markers = markers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set a fallback vault root (supports ~ expansion).
    pub fn with_fallback(mut self, path: &str) -> Self {
        self.fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use halias_core::util::resolver::VaultResolver;
    ///
    /// let resolver = VaultResolver::new("halias");
    /// assert_eq!(resolver.env_var("VAULT"), "HALIAS_VAULT");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the vault root.
    ///
    /// Checks in order:
    /// 1. The explicit vault path
    /// 2. `{APP}_VAULT` environment variable
    /// 3. Walk up from the start directory looking for each marker
    /// 4. Fallback path (if configured)
    ///
    /// Explicit, environment, and fallback paths must exist to be used.
    pub fn vault_root(&self) -> Option<PathBuf> {
        if let Some(path) = &self.vault {
            if path.is_dir() {
                return Some(path.clone());
            }
            log::warn!("Vault {} does not exist", path.display());
        }

        let env_var = self.env_var("VAULT");
        if let Ok(path) = env::var(&env_var) {
            let path = expand_tilde(&path);
            if path.is_dir() {
                return Some(path);
            }
            log::warn!("{env_var} points to missing directory {}", path.display());
        }

        if let Some(start) = self.start_dir.clone().or_else(|| env::current_dir().ok()) {
            for marker in &self.markers {
                if let Some(root) = find_dir_with_marker(&start, marker) {
                    log::debug!("Found vault marker {marker} in {}", root.display());
                    return Some(root);
                }
            }
        }

        if let Some(fallback) = &self.fallback {
            if fallback.is_dir() {
                return Some(fallback.clone());
            }
        }

        None
    }

    /// Resolve the settings file for `vault`.
    ///
    /// Checks in order:
    /// 1. The explicit data file
    /// 2. `{APP}_DATA_FILE` environment variable
    /// 3. `<vault>/.halias/data.json`
    /// 4. `<config dir>/<app>/data.json`
    ///
    /// The file itself need not exist yet.
    pub fn data_file(&self, vault: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = &self.data_file {
            return Some(path.clone());
        }

        if let Ok(path) = env::var(self.env_var("DATA_FILE")) {
            return Some(expand_tilde(&path));
        }

        if let Some(vault) = vault {
            return Some(vault.join(DATA_DIR).join(DATA_FILE_NAME));
        }

        app_config_dir(&self.app_name).map(|dir| dir.join(DATA_FILE_NAME))
    }

    /// Get the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Resolvers in these tests use app names no environment defines.
    fn resolver() -> VaultResolver {
        VaultResolver::new("halias-resolver-test-x9q")
    }

    #[test]
    fn test_new_simple_name() {
        let resolver = VaultResolver::new("halias");
        assert_eq!(resolver.app_name(), "halias");
        assert_eq!(resolver.env_prefix(), "HALIAS");
    }

    #[test]
    fn test_new_kebab_case_name() {
        let resolver = VaultResolver::new("my-notes");
        assert_eq!(resolver.env_prefix(), "MY_NOTES");
    }

    #[test]
    fn test_env_var() {
        let resolver = VaultResolver::new("halias");
        assert_eq!(resolver.env_var("VAULT"), "HALIAS_VAULT");
        assert_eq!(resolver.env_var("DATA_FILE"), "HALIAS_DATA_FILE");
    }

    // ------------------------------------------------------------------------
    // vault_root tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_vault_root_explicit() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver().with_vault(Some(&temp.path().to_string_lossy()));
        assert_eq!(resolver.vault_root().unwrap(), temp.path());
    }

    #[test]
    fn test_vault_root_explicit_missing_falls_through() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver()
            .with_vault(Some("/definitely/not/a/vault/x9q"))
            .with_start_dir(temp.path())
            .with_fallback(&temp.path().to_string_lossy());
        assert_eq!(resolver.vault_root().unwrap(), temp.path());
    }

    #[test]
    fn test_vault_root_from_marker() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".obsidian")).unwrap();
        let nested = temp.path().join("daily/2024");
        std::fs::create_dir_all(&nested).unwrap();

        let resolver = resolver()
            .with_markers(VAULT_MARKERS)
            .with_start_dir(&nested);
        assert_eq!(resolver.vault_root().unwrap(), temp.path());
    }

    #[test]
    fn test_vault_root_marker_priority() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".obsidian")).unwrap();
        let inner = temp.path().join("inner");
        std::fs::create_dir_all(inner.join(DATA_DIR)).unwrap();

        let resolver = resolver().with_markers(VAULT_MARKERS).with_start_dir(&inner);
        assert_eq!(resolver.vault_root().unwrap(), inner);
    }

    #[test]
    fn test_vault_root_with_fallback() {
        let temp = TempDir::new().unwrap();
        let start = TempDir::new().unwrap();
        let resolver = resolver()
            .with_start_dir(start.path())
            .with_fallback(&temp.path().to_string_lossy());
        assert_eq!(resolver.vault_root().unwrap(), temp.path());
    }

    #[test]
    fn test_vault_root_nonexistent() {
        let start = TempDir::new().unwrap();
        let resolver = resolver()
            .with_markers(&["no-such-marker-x9q"])
            .with_start_dir(start.path());
        assert!(resolver.vault_root().is_none());
    }

    // ------------------------------------------------------------------------
    // data_file tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_data_file_explicit_wins() {
        let resolver = resolver().with_data_file(Some("/tmp/settings.json"));
        assert_eq!(
            resolver.data_file(Some(Path::new("/vault"))).unwrap(),
            PathBuf::from("/tmp/settings.json")
        );
    }

    #[test]
    fn test_data_file_in_vault() {
        assert_eq!(
            resolver().data_file(Some(Path::new("/vault"))).unwrap(),
            PathBuf::from("/vault/.halias/data.json")
        );
    }

    #[test]
    fn test_data_file_config_dir_fallback() {
        let resolver = resolver();
        if let Some(path) = resolver.data_file(None) {
            assert!(path.ends_with("halias-resolver-test-x9q/data.json"));
        }
    }
}
