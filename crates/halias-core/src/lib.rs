//! Halias Core: settings, alias synchronization, and host traits.
//!
//! This crate holds everything that does not depend on how notes are stored:
//! the persisted settings, the heading-to-alias synchronizer, and the plugin
//! that drives it through host traits. It has no internal Halias
//! dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`settings`]: The persisted settings record and ignore list
//! - [`store`]: Settings persistence over a key-value data store
//! - [`intent`]: Settings changes as discrete events
//! - [`sync`]: Headings, alias lists, and the synchronizer
//! - [`host`]: Traits for the host's workspace, metadata cache, and frontmatter
//! - [`notice`]: Transient user notices
//! - [`command`]: Command registration and dispatch
//! - [`plugin`]: The plugin bound to a host
//! - [`util`]: Path and vault resolution

pub mod command;
pub mod error;
pub mod host;
pub mod intent;
pub mod notice;
pub mod plugin;
pub mod settings;
pub mod store;
pub mod sync;
pub mod util;

mod proptests;

// Re-export key types at crate root for convenience
pub use command::{CommandInfo, CommandOutcome, CommandRegistry, SyncReport};
pub use error::{Error, Result};
pub use host::{CachedMetadata, FrontmatterEditor, MemoryHost, MetadataCache, Workspace};
pub use intent::{IntentOutcome, SettingsIntent};
pub use notice::{Notice, Notifier};
pub use plugin::HeadingAliasesPlugin;
pub use settings::{IgnoreList, IgnoreOutcome, Settings};
pub use store::{DataStore, JsonFileStore, MemoryStore, SettingsStore};
pub use sync::{AliasList, Heading, synchronize};

// Convenience re-exports from util
pub use util::resolver::VaultResolver;
