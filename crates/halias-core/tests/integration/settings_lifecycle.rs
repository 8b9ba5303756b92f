//! Integration tests for settings persistence across plugin reloads.

use halias_core::{MemoryHost, SettingsIntent};
use serde_json::Value;

use crate::common::{TestHarness, aliases, roadmap_headings};

#[test]
fn test_fresh_install_uses_defaults() {
    let harness = TestHarness::new();
    let plugin = harness.plugin(MemoryHost::new());

    let settings = plugin.settings();
    assert_eq!(settings.max_heading_depth, 1);
    assert!(settings.add_as_written);
    assert!(!settings.add_lower_case_duplicate);
    assert!(settings.ignored_headings.is_empty());
    assert!(!harness.data_file().exists());
}

#[test]
fn test_changes_survive_reload() {
    let harness = TestHarness::new();
    {
        let mut plugin = harness.plugin(MemoryHost::new());
        plugin.apply(SettingsIntent::SetMaxDepth(3)).unwrap();
        plugin.apply(SettingsIntent::SetAsWritten(false)).unwrap();
        plugin.apply(SettingsIntent::SetLowerDuplicate(true)).unwrap();
        plugin.apply(SettingsIntent::AddIgnore("Goals".into())).unwrap();
    }

    let mut plugin = harness.plugin_with_note(roadmap_headings());
    assert_eq!(plugin.settings().max_heading_depth, 3);
    plugin.heading_to_aliases().unwrap();

    assert_eq!(aliases(&plugin), ["roadmap", "summary", "q3 milestones"]);
}

#[test]
fn test_saved_file_uses_record_field_names() {
    let harness = TestHarness::new();
    let mut plugin = harness.plugin(MemoryHost::new());
    plugin
        .apply(SettingsIntent::SetPendingIgnoreInput("Draft".into()))
        .unwrap();
    plugin.apply(SettingsIntent::AddPendingIgnore).unwrap();

    let raw = std::fs::read_to_string(harness.data_file()).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["maxHeadingDepth"], 1);
    assert_eq!(value["addAsWritten"], true);
    assert_eq!(value["addLowerCaseDuplicate"], false);
    assert_eq!(value["ignoredHeadings"], serde_json::json!(["draft"]));
    assert_eq!(value["pendingIgnoreInput"], "");
}

#[test]
fn test_partial_record_fills_defaults() {
    let harness = TestHarness::new().with_settings(r#"{ "addLowerCaseDuplicate": true }"#);
    let plugin = harness.plugin(MemoryHost::new());

    assert_eq!(plugin.settings().max_heading_depth, 1);
    assert!(plugin.settings().add_as_written);
    assert!(plugin.settings().add_lower_case_duplicate);
}

#[test]
fn test_bad_field_does_not_wipe_ignore_list() {
    let harness = TestHarness::new()
        .with_settings(r#"{ "maxHeadingDepth": "3", "ignoredHeadings": ["summary", "goals"] }"#);
    let mut plugin = harness.plugin(MemoryHost::new());
    assert_eq!(plugin.settings().ignored_headings.len(), 2);

    plugin.apply(SettingsIntent::SetAsWritten(true)).unwrap();

    let raw = std::fs::read_to_string(harness.data_file()).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["ignoredHeadings"], serde_json::json!(["summary", "goals"]));
    assert_eq!(value["maxHeadingDepth"], 1);
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let harness = TestHarness::new().with_settings("{ not json");
    let plugin = harness.plugin(MemoryHost::new());
    assert_eq!(plugin.settings().max_heading_depth, 1);
}

#[test]
fn test_remove_ignore_rule_and_notice() {
    let harness = TestHarness::new()
        .with_settings(r#"{ "ignoredHeadings": ["summary", "goals"] }"#);
    let mut plugin = harness.plugin(MemoryHost::new());

    plugin
        .apply(SettingsIntent::RemoveIgnore("Summary".into()))
        .unwrap();

    assert_eq!(
        plugin.settings().ignored_headings.iter().collect::<Vec<_>>(),
        ["goals"]
    );
    assert_eq!(
        plugin.notifier().messages(),
        ["Removed ignore rule for \"summary\""]
    );
}
