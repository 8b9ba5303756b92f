//! Heading-to-alias synchronization.
//!
//! [`synchronize`] merges a note's headings into its frontmatter alias list:
//!
//! ```rust
//! use halias_core::settings::Settings;
//! use halias_core::sync::{synchronize, AliasList, Heading};
//!
//! let headings = vec![Heading::new("Introduction", 1), Heading::new("Deep Note", 3)];
//! let settings = Settings { max_heading_depth: 2, ..Settings::default() };
//!
//! let mut aliases = AliasList::default();
//! let added = synchronize(&headings, &mut aliases, &settings);
//!
//! assert_eq!(added, 1);
//! assert_eq!(aliases.as_slice(), ["Introduction"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

// ============================================================================
// Heading
// ============================================================================

/// A heading as it appears in a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Heading {
    /// Heading text without the `#` markers.
    pub text: String,
    /// Number of `#` markers (1–6).
    pub depth: u8,
}

impl Heading {
    /// Create a heading.
    pub fn new(text: impl Into<String>, depth: u8) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }
}

// ============================================================================
// AliasList
// ============================================================================

/// Ordered alias list from a note's frontmatter.
///
/// A note without an `aliases` key is represented by an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasList(Vec<String>);

impl AliasList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `alias` is present (exact match).
    pub fn contains(&self, alias: &str) -> bool {
        self.0.iter().any(|a| a == alias)
    }

    /// Append `alias` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, alias: impl Into<String>) -> bool {
        let alias = alias.into();
        if self.contains(&alias) {
            return false;
        }
        self.0.push(alias);
        true
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Aliases in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the aliases in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Consume the list.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for AliasList {
    fn from(aliases: Vec<String>) -> Self {
        Self(aliases)
    }
}

impl<S: Into<String>> FromIterator<S> for AliasList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// synchronize
// ============================================================================

/// Append qualifying headings to `aliases`, returning how many were added.
///
/// Headings are visited in document order. A heading is skipped when it is
/// deeper than `settings.max_heading_depth` or matches the ignore list (case
/// insensitively). Otherwise the text as written and/or its lower-case form
/// are appended, each only if not already present. Existing entries,
/// including duplicates from elsewhere, are never touched.
pub fn synchronize(headings: &[Heading], aliases: &mut AliasList, settings: &Settings) -> usize {
    let before = aliases.len();
    let ignored = &settings.ignored_headings;

    for heading in headings {
        if !settings.includes_depth(heading.depth) {
            log::trace!("Skipping \"{}\" at depth {}", heading.text, heading.depth);
            continue;
        }
        if ignored.matches(&heading.text) {
            log::debug!("Skipping ignored heading \"{}\"", heading.text);
            continue;
        }

        if settings.add_as_written && aliases.push_unique(heading.text.as_str()) {
            log::debug!("Added alias \"{}\"", heading.text);
        }

        if settings.add_lower_case_duplicate {
            let lower = heading.text.to_lowercase();
            if !ignored.matches(&lower) && aliases.push_unique(lower.as_str()) {
                log::debug!("Added alias \"{lower}\"");
            }
        }
    }

    aliases.len() - before
}

// ============================================================================
// Tests
// ============================================================================
