//! Integration tests for the heading-to-alias command.

use halias_core::command::HEADING_TO_ALIAS;
use halias_core::{CommandOutcome, CommandRegistry, Heading, MemoryHost, SettingsIntent};

use crate::common::{NOTE, TestHarness, aliases, roadmap_headings};

#[test]
fn test_default_settings_add_top_level_heading_only() {
    let harness = TestHarness::new();
    let mut plugin = harness.plugin_with_note(roadmap_headings());

    plugin.heading_to_aliases().unwrap();

    assert_eq!(aliases(&plugin), ["Roadmap"]);
    assert_eq!(
        plugin.notifier().messages(),
        ["Added 1 new aliases to this file."]
    );
}

#[test]
fn test_deeper_headings_with_lower_case_duplicates() {
    let harness = TestHarness::new();
    let mut plugin = harness.plugin_with_note(roadmap_headings());
    plugin.apply(SettingsIntent::SetMaxDepth(2)).unwrap();
    plugin.apply(SettingsIntent::ToggleLowerDuplicate).unwrap();

    let outcome = plugin.run(HEADING_TO_ALIAS).unwrap().unwrap();

    let CommandOutcome::Synced(report) = outcome else {
        unreachable!("expected a sync");
    };
    assert_eq!(report.added, 6);
    assert_eq!(
        aliases(&plugin),
        ["Roadmap", "roadmap", "Goals", "goals", "Summary", "summary"]
    );
}

#[test]
fn test_ignored_heading_skipped_after_double_add() {
    let harness = TestHarness::new();
    let mut plugin = harness.plugin_with_note(roadmap_headings());
    plugin.apply(SettingsIntent::SetMaxDepth(6)).unwrap();
    plugin.apply(SettingsIntent::AddIgnore("Summary".into())).unwrap();
    plugin.apply(SettingsIntent::AddIgnore("Summary".into())).unwrap();

    assert_eq!(plugin.settings().ignored_headings.len(), 1);

    plugin.heading_to_aliases().unwrap();

    assert_eq!(aliases(&plugin), ["Roadmap", "Goals", "Q3 Milestones"]);
    assert_eq!(
        plugin.notifier().messages(),
        [
            "Heading \"summary\" added to ignore list!",
            "Heading already ignored.",
            "Added 3 new aliases to this file."
        ]
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let harness = TestHarness::new();
    let mut plugin = harness.plugin_with_note(roadmap_headings());
    plugin.apply(SettingsIntent::SetMaxDepth(6)).unwrap();

    plugin.heading_to_aliases().unwrap();
    let first = aliases(&plugin);
    let outcome = plugin.heading_to_aliases().unwrap();

    assert_eq!(aliases(&plugin), first);
    assert!(matches!(outcome, CommandOutcome::Synced(r) if r.added == 0));
}

#[test]
fn test_existing_aliases_preserved() {
    let harness = TestHarness::new();
    let mut host = MemoryHost::new().with_aliased_note(
        NOTE,
        roadmap_headings(),
        ["RM", "Roadmap", "RM"].into_iter().collect(),
    );
    host.open(NOTE);
    let mut plugin = harness.plugin(host);

    plugin.heading_to_aliases().unwrap();

    assert_eq!(aliases(&plugin), ["RM", "Roadmap", "RM"]);
    assert_eq!(
        plugin.notifier().messages(),
        ["Added 0 new aliases to this file."]
    );
}

#[test]
fn test_switching_documents() {
    let harness = TestHarness::new();
    let host = MemoryHost::new()
        .with_note("a.md", vec![Heading::new("Alpha", 1)])
        .with_note("b.md", vec![Heading::new("Beta", 1)]);
    let mut plugin = harness.plugin(host);

    assert_eq!(plugin.heading_to_aliases().unwrap(), CommandOutcome::Skipped);

    plugin.host_mut().open("a.md");
    plugin.heading_to_aliases().unwrap();
    plugin.host_mut().open("b.md");
    plugin.heading_to_aliases().unwrap();

    let host = plugin.host();
    assert_eq!(host.note("a.md").unwrap().aliases.as_ref().unwrap().as_slice(), ["Alpha"]);
    assert_eq!(host.note("b.md").unwrap().aliases.as_ref().unwrap().as_slice(), ["Beta"]);
    assert_eq!(plugin.notifier().messages().len(), 2);
}
