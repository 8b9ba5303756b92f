//! A directory of markdown notes as a plugin host.
//!
//! [`Vault`] implements the three host traits over the filesystem: the
//! active note is a path chosen by the caller, metadata comes from parsing
//! the note on demand, and alias edits rewrite the note's frontmatter block
//! in place.

use std::fs;
use std::path::{Path, PathBuf};

use halias_core::{
    AliasList, CachedMetadata, Error, FrontmatterEditor, MetadataCache, Result, Workspace,
};
use serde_yaml::Value;

use crate::markdown::{extract_frontmatter, extract_headings};
use crate::note::NoteFrontmatter;

/// File extension of notes.
pub const NOTE_EXTENSION: &str = "md";

/// Whether `path` names a markdown note.
pub fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

/// Filesystem-backed host.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    active: Option<PathBuf>,
    dry_run: bool,
}

impl Vault {
    /// Open the vault rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::not_found(format!(
                "vault directory {}",
                root.display()
            )));
        }
        log::debug!("Opened vault at {}", root.display());
        Ok(Self {
            root,
            active: None,
            dry_run: false,
        })
    }

    /// Compute alias edits without writing notes.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether writes are suppressed.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Resolve `path` to a note file.
    ///
    /// Absolute paths and paths that exist relative to the working directory
    /// are used as given; anything else is taken relative to the vault root.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let candidate = if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        if !candidate.is_file() {
            return Err(Error::not_found(format!("note {}", path.display())));
        }
        Ok(candidate)
    }

    /// Make the note at `path` the active document.
    pub fn open_note(&mut self, path: &Path) -> Result<PathBuf> {
        let resolved = self.resolve(path)?;
        log::debug!("Active note: {}", resolved.display());
        self.active = Some(resolved.clone());
        Ok(resolved)
    }

    /// Clear the active document.
    pub fn close_note(&mut self) {
        self.active = None;
    }
}

fn read_note(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

impl Workspace for Vault {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }
}

impl MetadataCache for Vault {
    fn file_cache(&self, document: &Path) -> Result<Option<CachedMetadata>> {
        if !is_note(document) {
            log::debug!("{} is not a markdown note", document.display());
            return Ok(None);
        }
        let content = read_note(document)?;
        let frontmatter = extract_frontmatter(&content);
        Ok(Some(CachedMetadata {
            headings: Some(extract_headings(frontmatter.body())),
        }))
    }
}

impl FrontmatterEditor for Vault {
    fn process_aliases(
        &mut self,
        document: &Path,
        edit: &mut dyn FnMut(&mut AliasList),
    ) -> Result<()> {
        let content = read_note(document)?;
        let frontmatter = extract_frontmatter(&content);
        if let Some(error) = frontmatter.error() {
            return Err(Error::parse(format!(
                "Invalid frontmatter in {}: {error}",
                document.display()
            )));
        }

        let original = frontmatter.value().cloned();
        let mut note = NoteFrontmatter::from_value(original.clone())?;
        edit(note.aliases_mut());
        let mapping = note.into_mapping();

        if original.as_ref() == Some(&Value::Mapping(mapping.clone())) {
            log::debug!("Frontmatter of {} unchanged", document.display());
            return Ok(());
        }
        if self.dry_run {
            log::info!("Dry run: not writing {}", document.display());
            return Ok(());
        }

        if !frontmatter.had_delimiters() {
            log::debug!("Adding frontmatter to {}", document.display());
        }
        let rendered = frontmatter.rewrite(&mapping)?;
        fs::write(document, rendered).map_err(|e| Error::io_with_path(e, document))?;
        log::debug!("Wrote frontmatter of {}", document.display());
        Ok(())
    }
}
