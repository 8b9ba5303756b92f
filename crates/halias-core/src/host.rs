//! Host services consumed by the plugin.
//!
//! The editor that runs the plugin owns the notes, parses them, and stores
//! their frontmatter. These traits are the narrow view the plugin needs:
//!
//! - [`Workspace`]: which note is active
//! - [`MetadataCache`]: the parsed headings of a note
//! - [`FrontmatterEditor`]: read-modify-write of a note's alias list
//!
//! `halias-content` implements all three for a directory of markdown files;
//! [`MemoryHost`] implements them in memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sync::{AliasList, Heading};

/// Parsed metadata the host keeps for one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedMetadata {
    /// Headings in document order, if the note was parsed for headings.
    pub headings: Option<Vec<Heading>>,
}

impl CachedMetadata {
    /// Headings, or `None` when absent or empty.
    pub fn non_empty_headings(&self) -> Option<&[Heading]> {
        match &self.headings {
            Some(headings) if !headings.is_empty() => Some(headings.as_slice()),
            _ => None,
        }
    }
}

/// Tracks the note the user is working on.
pub trait Workspace {
    /// The active note, if any.
    fn active_document(&self) -> Option<PathBuf>;
}

/// Per-note parse results.
pub trait MetadataCache {
    /// Cached metadata for `document`, or `None` if the host has none.
    fn file_cache(&self, document: &Path) -> Result<Option<CachedMetadata>>;
}

/// Atomic rewrite of a note's frontmatter alias list.
pub trait FrontmatterEditor {
    /// Hand the note's alias list to `edit`, then store the result.
    ///
    /// A note without an `aliases` key (or without frontmatter) gets an
    /// empty list, which is written back.
    fn process_aliases(
        &mut self,
        document: &Path,
        edit: &mut dyn FnMut(&mut AliasList),
    ) -> Result<()>;
}

// ============================================================================
// MemoryHost
// ============================================================================

/// A note held by [`MemoryHost`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNote {
    /// Parsed headings; `None` means the host never cached the note.
    pub headings: Option<Vec<Heading>>,
    /// Frontmatter alias list; `None` means the key is absent.
    pub aliases: Option<AliasList>,
    /// Number of frontmatter rewrites.
    pub writes: usize,
}

/// In-memory host, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    notes: BTreeMap<PathBuf, MemoryNote>,
    active: Option<PathBuf>,
}

impl MemoryHost {
    /// Create an empty host with no active note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note with the given headings and no `aliases` key.
    pub fn with_note(mut self, path: impl Into<PathBuf>, headings: Vec<Heading>) -> Self {
        self.notes.insert(
            path.into(),
            MemoryNote {
                headings: Some(headings),
                ..MemoryNote::default()
            },
        );
        self
    }

    /// Add a note that already has an alias list.
    pub fn with_aliased_note(
        mut self,
        path: impl Into<PathBuf>,
        headings: Vec<Heading>,
        aliases: AliasList,
    ) -> Self {
        self.notes.insert(
            path.into(),
            MemoryNote {
                headings: Some(headings),
                aliases: Some(aliases),
                writes: 0,
            },
        );
        self
    }

    /// Add a note the metadata cache knows nothing about.
    pub fn with_uncached_note(mut self, path: impl Into<PathBuf>) -> Self {
        self.notes.insert(path.into(), MemoryNote::default());
        self
    }

    /// Make `path` the active note.
    pub fn open(&mut self, path: impl Into<PathBuf>) {
        self.active = Some(path.into());
    }

    /// Clear the active note.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The stored note at `path`.
    pub fn note(&self, path: impl AsRef<Path>) -> Option<&MemoryNote> {
        self.notes.get(path.as_ref())
    }
}

impl Workspace for MemoryHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }
}

impl MetadataCache for MemoryHost {
    fn file_cache(&self, document: &Path) -> Result<Option<CachedMetadata>> {
        Ok(self.notes.get(document).and_then(|note| {
            note.headings.as_ref().map(|headings| CachedMetadata {
                headings: Some(headings.clone()),
            })
        }))
    }
}

impl FrontmatterEditor for MemoryHost {
    fn process_aliases(
        &mut self,
        document: &Path,
        edit: &mut dyn FnMut(&mut AliasList),
    ) -> Result<()> {
        let note = self
            .notes
            .get_mut(document)
            .ok_or_else(|| Error::not_found(document.display().to_string()))?;
        let aliases = note.aliases.get_or_insert_with(AliasList::default);
        edit(aliases);
        note.writes += 1;
        Ok(())
    }
}
