//! Common test utilities and harness for halias-core integration tests.

use std::path::PathBuf;

use halias_core::notice::RecordingNotifier;
use halias_core::{HeadingAliasesPlugin, Heading, JsonFileStore, MemoryHost};
use tempfile::TempDir;

/// Path of the note every harness opens.
pub const NOTE: &str = "Projects/Roadmap.md";

/// Plugin type used throughout the integration tests.
pub type TestPlugin = HeadingAliasesPlugin<MemoryHost, JsonFileStore, RecordingNotifier>;

/// Test harness for integration tests.
///
/// Owns a temporary directory for the settings file so that a plugin can be
/// reloaded from what an earlier plugin saved.
pub struct TestHarness {
    /// Holds the settings file
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates a harness with an empty settings directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Path of the settings file.
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join(".halias").join("data.json")
    }

    /// Write raw settings JSON before loading.
    pub fn with_settings(self, json: &str) -> Self {
        let path = self.data_file();
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
        std::fs::write(&path, json).expect("write settings");
        self
    }

    /// Load a plugin bound to `host`.
    pub fn plugin(&self, host: MemoryHost) -> TestPlugin {
        HeadingAliasesPlugin::load(
            host,
            JsonFileStore::new(self.data_file()),
            RecordingNotifier::new(),
        )
    }

    /// Load a plugin whose active note is [`NOTE`] with `headings`.
    pub fn plugin_with_note(&self, headings: Vec<Heading>) -> TestPlugin {
        let mut host = MemoryHost::new().with_note(NOTE, headings);
        host.open(NOTE);
        self.plugin(host)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Headings of a typical project note.
pub fn roadmap_headings() -> Vec<Heading> {
    vec![
        Heading::new("Roadmap", 1),
        Heading::new("Goals", 2),
        Heading::new("Summary", 2),
        Heading::new("Q3 Milestones", 3),
    ]
}

/// The aliases currently stored on [`NOTE`].
pub fn aliases(plugin: &TestPlugin) -> Vec<String> {
    plugin
        .host()
        .note(NOTE)
        .and_then(|note| note.aliases.clone())
        .map(|aliases| aliases.into_vec())
        .unwrap_or_default()
}
