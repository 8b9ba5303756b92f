//! Settings intents.
//!
//! A settings front end (panel, CLI, editor command) never touches the stored
//! record directly. It emits a [`SettingsIntent`], the [`SettingsStore`]
//! applies and persists it, and the returned [`IntentOutcome`] says what the
//! user should be told.
//!
//! # Example
//!
//! ```rust
//! use halias_core::intent::SettingsIntent;
//! use halias_core::store::{MemoryStore, SettingsStore};
//!
//! let mut store = SettingsStore::load(MemoryStore::default());
//! store.apply(SettingsIntent::SetMaxDepth(3)).unwrap();
//! store.apply(SettingsIntent::ToggleLowerDuplicate).unwrap();
//!
//! assert_eq!(store.settings().max_heading_depth, 3);
//! assert!(store.settings().add_lower_case_duplicate);
//! ```

use serde_json::Value;

use crate::error::{Error, Result};
use crate::notice::{Notice, SHORT_NOTICE};
use crate::settings::{IgnoreOutcome, Settings};
use crate::store::{DataStore, SettingsStore};

/// Persisted setting keys, in record order.
pub const SETTING_KEYS: [&str; 5] = [
    "maxHeadingDepth",
    "addAsWritten",
    "addLowerCaseDuplicate",
    "ignoredHeadings",
    "pendingIgnoreInput",
];

/// A single requested change to the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// Set the deepest heading level to include (1–6).
    SetMaxDepth(u8),
    /// Flip "add heading as written".
    ToggleAsWritten,
    /// Set "add heading as written".
    SetAsWritten(bool),
    /// Flip "add heading in lower case".
    ToggleLowerDuplicate,
    /// Set "add heading in lower case".
    SetLowerDuplicate(bool),
    /// Replace the buffered ignore-list input.
    SetPendingIgnoreInput(String),
    /// Add a heading to the ignore list.
    AddIgnore(String),
    /// Add the buffered input to the ignore list, clearing the buffer on success.
    AddPendingIgnore,
    /// Remove a heading from the ignore list.
    RemoveIgnore(String),
}

impl SettingsIntent {
    /// Build the intent that sets `key` to `value`.
    ///
    /// `key` is a persisted field name. The ignore list itself cannot be set
    /// wholesale; use [`SettingsIntent::AddIgnore`] and
    /// [`SettingsIntent::RemoveIgnore`].
    pub fn from_setting(key: &str, value: &Value) -> Result<Self> {
        match key {
            "maxHeadingDepth" | "maxHeadingLevel" => {
                let depth = value
                    .as_u64()
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or_else(|| {
                        Error::validation_field(key, format!("expected a depth 1-6, got {value}"))
                    })?;
                Ok(Self::SetMaxDepth(depth))
            }
            "addAsWritten" => Ok(Self::SetAsWritten(expect_bool(key, value)?)),
            "addLowerCaseDuplicate" | "addLowerDuplicate" => {
                Ok(Self::SetLowerDuplicate(expect_bool(key, value)?))
            }
            "pendingIgnoreInput" | "ignoredHeadingInput" => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Ok(Self::SetPendingIgnoreInput(text))
            }
            "ignoredHeadings" => Err(Error::validation_field(
                key,
                "the ignore list is edited one entry at a time",
            )),
            _ => Err(Error::not_found(format!("setting '{key}'"))),
        }
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::validation_field(key, format!("expected true or false, got {value}")))
}

/// What applying a [`SettingsIntent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A plain field was changed and saved.
    Updated,
    /// An ignore-list addition was attempted.
    Ignored(IgnoreOutcome),
    /// An ignore-list removal was attempted; holds the removed entry.
    Unignored(Option<String>),
}

impl IntentOutcome {
    /// The notice the user should see, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Updated => None,
            Self::Ignored(IgnoreOutcome::Added(entry)) => Some(Notice::new(format!(
                "Heading \"{entry}\" added to ignore list!"
            ))),
            Self::Ignored(IgnoreOutcome::AlreadyPresent(_)) => {
                Some(Notice::new("Heading already ignored.").with_timeout(SHORT_NOTICE))
            }
            Self::Ignored(IgnoreOutcome::Blank) => None,
            Self::Unignored(Some(entry)) => {
                Some(Notice::new(format!("Removed ignore rule for \"{entry}\"")))
            }
            Self::Unignored(None) => None,
        }
    }
}

impl<B: DataStore> SettingsStore<B> {
    /// Apply `intent` and persist the result.
    pub fn apply(&mut self, intent: SettingsIntent) -> Result<IntentOutcome> {
        log::debug!("Applying {intent:?}");
        match intent {
            SettingsIntent::SetMaxDepth(depth) => {
                let depth = Settings::validate_depth(depth)?;
                self.update(|s| s.max_heading_depth = depth)?;
            }
            SettingsIntent::ToggleAsWritten => {
                self.update(|s| s.add_as_written = !s.add_as_written)?;
            }
            SettingsIntent::SetAsWritten(on) => {
                self.update(|s| s.add_as_written = on)?;
            }
            SettingsIntent::ToggleLowerDuplicate => {
                self.update(|s| s.add_lower_case_duplicate = !s.add_lower_case_duplicate)?;
            }
            SettingsIntent::SetLowerDuplicate(on) => {
                self.update(|s| s.add_lower_case_duplicate = on)?;
            }
            SettingsIntent::SetPendingIgnoreInput(text) => {
                self.update(|s| s.pending_ignore_input = text)?;
            }
            SettingsIntent::AddIgnore(text) => {
                return Ok(IntentOutcome::Ignored(self.add_ignored_heading(&text)?));
            }
            SettingsIntent::AddPendingIgnore => {
                let text = self.settings().pending_ignore_input.clone();
                let outcome = self.add_ignored_heading(&text)?;
                if matches!(outcome, IgnoreOutcome::Added(_)) {
                    self.update(|s| s.pending_ignore_input.clear())?;
                }
                return Ok(IntentOutcome::Ignored(outcome));
            }
            SettingsIntent::RemoveIgnore(text) => {
                return Ok(IntentOutcome::Unignored(self.remove_ignored_heading(&text)?));
            }
        }
        Ok(IntentOutcome::Updated)
    }
}

// ============================================================================
// Tests
// ============================================================================
