//! Content helpers.

/// Split a comma-separated alias string into its entries.
///
/// Entries are trimmed and empty entries dropped, so a leading comma (as
/// produced by appending `,Heading` to an empty string) is harmless.
///
/// # Example
///
/// ```rust
/// use halias_content::markdown::parse_alias_string;
///
/// let aliases = parse_alias_string(",Roadmap, Goals ,,Q3");
/// assert_eq!(aliases, vec!["Roadmap", "Goals", "Q3"]);
/// ```
pub fn parse_alias_string(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
