//! Handler functions for settings and ignore-list CLI commands.
//!
//! Every change goes through a [`SettingsIntent`] so the CLI saves and
//! notifies exactly as an in-editor settings panel would.

use halias_core::intent::SETTING_KEYS;
use halias_core::store::DataStore;
use halias_core::{
    Error, IntentOutcome, JsonFileStore, Notifier, Result, Settings, SettingsIntent,
};
use serde_json::Value;

use crate::cli::{IgnoreAction, SettingsAction};
use crate::context::Context;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a `settings` subcommand.
pub fn handle_settings_command<N: Notifier>(
    ctx: &Context,
    action: SettingsAction,
    notifier: N,
) -> Result<()> {
    match action {
        SettingsAction::Path => cmd_settings_path(ctx),
        SettingsAction::Show => cmd_settings_show(ctx),
        SettingsAction::Get { key } => cmd_settings_get(ctx, &key),
        SettingsAction::Set { key, value } => cmd_settings_set(ctx, &key, &value, notifier),
        SettingsAction::Init { force } => cmd_settings_init(ctx, force),
    }
}

/// Handle an `ignore` subcommand.
pub fn handle_ignore_command<N: Notifier>(
    ctx: &Context,
    action: IgnoreAction,
    notifier: N,
) -> Result<()> {
    match action {
        IgnoreAction::Add { heading } => {
            apply_intent(ctx, SettingsIntent::AddIgnore(heading), notifier).map(|_| ())
        }
        IgnoreAction::Remove { heading } => {
            let outcome = apply_intent(ctx, SettingsIntent::RemoveIgnore(heading.clone()), notifier)?;
            if outcome == IntentOutcome::Unignored(None) {
                eprintln!("\"{heading}\" was not in the ignore list");
            }
            Ok(())
        }
        IgnoreAction::List => cmd_ignore_list(ctx),
    }
}

// ============================================================================
// Settings handlers
// ============================================================================

/// Show the resolved settings file path.
pub fn cmd_settings_path(ctx: &Context) -> Result<()> {
    let path = ctx.data_file();
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `halias settings init` to create it)");
    }
    Ok(())
}

/// Print every setting as pretty JSON.
pub fn cmd_settings_show(ctx: &Context) -> Result<()> {
    let settings = ctx.settings_store().settings().clone();
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Print one setting.
pub fn cmd_settings_get(ctx: &Context, key: &str) -> Result<()> {
    let value = setting_value(ctx.settings_store().settings(), key)?;
    match value {
        Value::String(s) => println!("{s}"),
        other => println!("{other}"),
    }
    Ok(())
}

/// Change one setting and save.
pub fn cmd_settings_set<N: Notifier>(
    ctx: &Context,
    key: &str,
    value: &str,
    notifier: N,
) -> Result<()> {
    let intent = SettingsIntent::from_setting(key, &parse_value(value))?;
    apply_intent(ctx, intent, notifier)?;
    println!("Set {key} = {value} in {}", ctx.data_file().display());
    Ok(())
}

/// Write the default settings to the settings file.
pub fn cmd_settings_init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.data_file();
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Settings file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    let mut store = JsonFileStore::new(path);
    store.save_data(&serde_json::to_value(Settings::default())?)?;

    println!("Settings file created at {}", path.display());
    Ok(())
}

/// List ignored headings, one per line.
pub fn cmd_ignore_list(ctx: &Context) -> Result<()> {
    let store = ctx.settings_store();
    let ignored = &store.settings().ignored_headings;
    if ignored.is_empty() {
        eprintln!("(no ignored headings)");
    }
    for entry in ignored.iter() {
        println!("{entry}");
    }
    Ok(())
}

// ============================================================================
// Helpers (public for reuse)
// ============================================================================

/// Apply `intent` to the stored settings and post its notice.
pub fn apply_intent<N: Notifier>(
    ctx: &Context,
    intent: SettingsIntent,
    notifier: N,
) -> Result<IntentOutcome> {
    let mut store = ctx.settings_store();
    let outcome = store.apply(intent)?;
    if let Some(notice) = outcome.notice() {
        notifier.notify(notice);
    }
    Ok(outcome)
}

/// Look up a persisted setting by name.
pub fn setting_value(settings: &Settings, key: &str) -> Result<Value> {
    if !SETTING_KEYS.contains(&key) {
        return Err(Error::not_found(format!(
            "setting '{key}' (known: {})",
            SETTING_KEYS.join(", ")
        )));
    }
    let record = serde_json::to_value(settings)?;
    record
        .get(key)
        .cloned()
        .ok_or_else(|| Error::not_found(format!("setting '{key}'")))
}

/// Parse a command-line value into JSON, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
pub fn parse_value(s: &str) -> Value {
    if s == "true" {
        return Value::Bool(true);
    }
    if s == "false" {
        return Value::Bool(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use halias_core::notice::RecordingNotifier;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir) -> Context {
        Context::new(Some(dir.path().to_path_buf()), dir.path().join("data.json"))
    }

    fn stored(dir: &TempDir) -> Value {
        let raw = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    // ------------------------------------------------------------------------
    // parse_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("false"), Value::Bool(false));
        assert_eq!(parse_value("3"), Value::from(3));
        assert_eq!(parse_value("2.5"), Value::from(2.5));
        assert_eq!(parse_value("Summary"), Value::from("Summary"));
        assert_eq!(parse_value("NaN"), Value::from("NaN"));
    }

    // ------------------------------------------------------------------------
    // settings tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_settings_init_creates_defaults() {
        let dir = TempDir::new().unwrap();
        cmd_settings_init(&ctx(&dir), false).unwrap();

        let value = stored(&dir);
        assert_eq!(value["maxHeadingDepth"], 1);
        assert_eq!(value["addAsWritten"], true);
    }

    #[test]
    fn test_settings_init_no_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.json"), "{}").unwrap();

        let result = cmd_settings_init(&ctx(&dir), false);
        assert!(matches!(result, Err(Error::Config { .. })));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("data.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_settings_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.json"), r#"{"maxHeadingDepth": 5}"#).unwrap();

        cmd_settings_init(&ctx(&dir), true).unwrap();
        assert_eq!(stored(&dir)["maxHeadingDepth"], 1);
    }

    #[test]
    fn test_settings_set_and_get() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir);
        let notifier = RecordingNotifier::new();

        cmd_settings_set(&ctx, "maxHeadingDepth", "4", &notifier).unwrap();
        cmd_settings_set(&ctx, "addLowerCaseDuplicate", "true", &notifier).unwrap();

        let settings = ctx.settings_store().settings().clone();
        assert_eq!(setting_value(&settings, "maxHeadingDepth").unwrap(), 4);
        assert_eq!(
            setting_value(&settings, "addLowerCaseDuplicate").unwrap(),
            true
        );
        assert!(notifier.messages().is_empty());
        assert!(cmd_settings_get(&ctx, "maxHeadingDepth").is_ok());
    }

    #[test]
    fn test_settings_set_legacy_key() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir);
        cmd_settings_set(&ctx, "maxHeadingLevel", "2", RecordingNotifier::new()).unwrap();
        assert_eq!(stored(&dir)["maxHeadingDepth"], 2);
    }

    #[test]
    fn test_settings_set_rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir);
        let notifier = RecordingNotifier::new();

        assert!(cmd_settings_set(&ctx, "maxHeadingDepth", "9", &notifier).is_err());
        assert!(cmd_settings_set(&ctx, "addAsWritten", "yes", &notifier).is_err());
        assert!(cmd_settings_set(&ctx, "ignoredHeadings", "x", &notifier).is_err());
        assert!(matches!(
            cmd_settings_set(&ctx, "colour", "red", &notifier),
            Err(Error::NotFound(_))
        ));
        assert!(!dir.path().join("data.json").exists());
    }

    #[test]
    fn test_setting_value_unknown_key() {
        let result = setting_value(&Settings::default(), "maxHeadingLevel");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    // ------------------------------------------------------------------------
    // ignore tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_ignore_add_twice_and_remove() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir);
        let notifier = RecordingNotifier::new();

        let add = || IgnoreAction::Add {
            heading: "Summary".into(),
        };
        handle_ignore_command(&ctx, add(), &notifier).unwrap();
        handle_ignore_command(&ctx, add(), &notifier).unwrap();
        assert_eq!(stored(&dir)["ignoredHeadings"], serde_json::json!(["summary"]));

        handle_ignore_command(
            &ctx,
            IgnoreAction::Remove {
                heading: "summary".into(),
            },
            &notifier,
        )
        .unwrap();
        assert_eq!(stored(&dir)["ignoredHeadings"], serde_json::json!([]));

        assert_eq!(
            notifier.messages(),
            [
                "Heading \"summary\" added to ignore list!",
                "Heading already ignored.",
                "Removed ignore rule for \"summary\""
            ]
        );
    }

    #[test]
    fn test_ignore_list_without_file() {
        let dir = TempDir::new().unwrap();
        assert!(cmd_ignore_list(&ctx(&dir)).is_ok());
    }
}
