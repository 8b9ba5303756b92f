//! User settings for heading-to-alias synchronization.
//!
//! Settings are persisted as one flat JSON record:
//!
//! ```json
//! {
//!   "maxHeadingDepth": 2,
//!   "addAsWritten": true,
//!   "addLowerCaseDuplicate": false,
//!   "ignoredHeadings": ["summary", "examples"],
//!   "pendingIgnoreInput": ""
//! }
//! ```
//!
//! Missing fields take their defaults, so an empty object is a valid record.
//! Field names used by earlier releases (`maxHeadingLevel`,
//! `addLowerDuplicate`, `ignoredHeadingInput`) are still accepted on read.
//! [`Settings::from_record`] reads a stored record one field at a time, so a
//! single bad field never costs the others.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Shallowest heading depth (`#`).
pub const MIN_HEADING_DEPTH: u8 = 1;

/// Deepest heading depth (`######`).
pub const MAX_HEADING_DEPTH: u8 = 6;

/// Field names from earlier releases, paired with their current names.
const RENAMED_FIELDS: [(&str, &str); 3] = [
    ("maxHeadingLevel", "maxHeadingDepth"),
    ("addLowerDuplicate", "addLowerCaseDuplicate"),
    ("ignoredHeadingInput", "pendingIgnoreInput"),
];

// ============================================================================
// Settings
// ============================================================================

/// User configuration read by the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Deepest heading level that is turned into an alias (1–6).
    #[serde(alias = "maxHeadingLevel")]
    pub max_heading_depth: u8,

    /// Add each heading exactly as written.
    pub add_as_written: bool,

    /// Add a lower-cased copy of each heading.
    #[serde(alias = "addLowerDuplicate")]
    pub add_lower_case_duplicate: bool,

    /// Headings that never become aliases, stored lower-cased.
    pub ignored_headings: IgnoreList,

    /// Text typed into the ignore-list input but not yet added.
    #[serde(alias = "ignoredHeadingInput")]
    pub pending_ignore_input: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_heading_depth: MIN_HEADING_DEPTH,
            add_as_written: true,
            add_lower_case_duplicate: false,
            ignored_headings: IgnoreList::default(),
            pending_ignore_input: String::new(),
        }
    }
}

impl Settings {
    /// Check that `depth` is a valid heading depth.
    pub fn validate_depth(depth: u8) -> Result<u8> {
        if (MIN_HEADING_DEPTH..=MAX_HEADING_DEPTH).contains(&depth) {
            Ok(depth)
        } else {
            Err(Error::validation_field(
                "maxHeadingDepth",
                format!(
                    "must be between {MIN_HEADING_DEPTH} and {MAX_HEADING_DEPTH}, got {depth}"
                ),
            ))
        }
    }

    /// Build settings from a stored record, laying each valid field over the
    /// defaults.
    ///
    /// A field that fails to deserialize is logged and keeps its default.
    /// When a record carries both an old field name and its replacement, the
    /// replacement wins. Unknown fields are dropped; a record that is not an
    /// object yields defaults.
    pub fn from_record(record: Value) -> Self {
        let Value::Object(fields) = record else {
            log::warn!("Stored settings are not an object, using defaults");
            return Self::default();
        };
        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(defaults)) => defaults,
            _ => return Self::default(),
        };

        for (key, value) in &fields {
            let name = current_field_name(key);
            if name != key && fields.contains_key(name) {
                log::debug!("Ignoring stored {key}, {name} is also present");
                continue;
            }
            if !merged.contains_key(name) {
                log::debug!("Ignoring unknown settings field {key}");
                continue;
            }
            match parse_field(name, value.clone()) {
                Ok(parsed) => {
                    merged.insert(name.to_string(), parsed);
                }
                Err(e) => log::warn!("Ignoring stored {key}, keeping its default: {e}"),
            }
        }

        match serde_json::from_value::<Self>(Value::Object(merged)) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                log::warn!("Failed to assemble settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Bring a freshly loaded record back inside its invariants.
    ///
    /// The depth is clamped into 1–6. The ignore list normalizes itself on
    /// deserialization.
    pub fn normalized(mut self) -> Self {
        let clamped = self
            .max_heading_depth
            .clamp(MIN_HEADING_DEPTH, MAX_HEADING_DEPTH);
        if clamped != self.max_heading_depth {
            log::warn!(
                "Stored maxHeadingDepth {} is out of range, using {clamped}",
                self.max_heading_depth
            );
            self.max_heading_depth = clamped;
        }
        self
    }

    /// Whether a heading at `depth` is shallow enough to become an alias.
    pub fn includes_depth(&self, depth: u8) -> bool {
        depth <= self.max_heading_depth
    }
}

fn current_field_name(key: &str) -> &str {
    RENAMED_FIELDS
        .iter()
        .find(|(old, _)| *old == key)
        .map_or(key, |(_, new)| new)
}

/// Deserialize one field on its own and return it in stored form.
fn parse_field(name: &str, value: Value) -> serde_json::Result<Value> {
    let mut single = Map::new();
    single.insert(name.to_string(), value);
    let settings: Settings = serde_json::from_value(Value::Object(single))?;
    let mut record = serde_json::to_value(settings)?;
    Ok(record.get_mut(name).map(Value::take).unwrap_or(Value::Null))
}

// ============================================================================
// IgnoreList
// ============================================================================

/// Result of adding an entry to the [`IgnoreList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreOutcome {
    /// The normalized entry was appended.
    Added(String),
    /// An equal entry (ignoring case) was already listed.
    AlreadyPresent(String),
    /// The input was empty or whitespace.
    Blank,
}

/// Case-insensitive set of headings that must never become aliases.
///
/// Entries are stored trimmed and lower-cased, without duplicates, in the
/// order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IgnoreList {
    entries: Vec<String>,
}

impl IgnoreList {
    /// Normalize heading text the way ignore entries are stored.
    pub fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Whether `text` matches an entry, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let needle = Self::normalize(text);
        self.entries.iter().any(|entry| *entry == needle)
    }

    /// Add `text` to the list.
    pub fn insert(&mut self, text: &str) -> IgnoreOutcome {
        let entry = Self::normalize(text);
        if entry.is_empty() {
            return IgnoreOutcome::Blank;
        }
        if self.entries.contains(&entry) {
            return IgnoreOutcome::AlreadyPresent(entry);
        }
        self.entries.push(entry.clone());
        IgnoreOutcome::Added(entry)
    }

    /// Remove the entry for `text`, returning it if it was listed.
    pub fn remove(&mut self, text: &str) -> Option<String> {
        let entry = Self::normalize(text);
        let pos = self.entries.iter().position(|e| *e == entry)?;
        Some(self.entries.remove(pos))
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for IgnoreList {
    fn from(raw: Vec<String>) -> Self {
        let mut list = IgnoreList::default();
        for entry in &raw {
            list.insert(entry);
        }
        list
    }
}

impl From<IgnoreList> for Vec<String> {
    fn from(list: IgnoreList) -> Self {
        list.entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = IgnoreList::default();
        for entry in iter {
            list.insert(entry.as_ref());
        }
        list
    }
}

// ============================================================================
// Tests
// ============================================================================
