//! YAML frontmatter extraction and rendering.
//!
//! Frontmatter is a YAML block at the very start of a note, opened by a line
//! containing only `---` and closed by a line containing only `---` or
//! `...`:
//!
//! ```markdown
//! ---
//! tags: [project]
//! aliases:
//!   - Roadmap
//! ---
//!
//! # Roadmap
//! ```
//!
//! A UTF-8 byte order mark before the opening line is set aside and put
//! back by [`Frontmatter::rewrite`].
//!
//! # Usage
//!
//! ```rust
//! use halias_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let result = extract_frontmatter(content);
//!
//! assert!(result.had_delimiters());
//! assert_eq!(result.value().and_then(|v| v.get("title")).and_then(|v| v.as_str()), Some("Test"));
//! assert_eq!(result.body().trim(), "Body");
//! ```

use halias_core::{Error, Result};
use serde_yaml::{Mapping, Value};

const OPENING: &str = "---";
const CLOSINGS: [&str; 2] = ["---", "..."];
const BOM: char = '\u{feff}';

/// Result of frontmatter extraction.
///
/// Holds the parsed YAML (if present and valid) and the note body that
/// follows the closing delimiter.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed YAML, if the block was present and valid.
    value: Option<Value>,
    /// Everything after the closing delimiter line.
    body: &'a str,
    /// Whether both delimiters were found.
    had_delimiters: bool,
    /// Whether the note started with a byte order mark.
    bom: bool,
    /// YAML error message, if the block failed to parse.
    error: Option<String>,
}

impl<'a> Frontmatter<'a> {
    fn parsed(value: Value, body: &'a str, bom: bool) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
            bom,
            error: None,
        }
    }

    fn absent(body: &'a str, bom: bool) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
            bom,
            error: None,
        }
    }

    fn invalid(error: String, body: &'a str, bom: bool) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
            bom,
            error: Some(error),
        }
    }

    /// Check if frontmatter delimiters were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Whether the note started with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// The YAML error, if the block was present but invalid.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after frontmatter, without the
    /// byte order mark).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Render the note again with `mapping` in place of this block.
    ///
    /// The body and any byte order mark are kept as they were.
    pub fn rewrite(&self, mapping: &Mapping) -> Result<String> {
        let rendered = render_with_frontmatter(mapping, self.body)?;
        Ok(if self.bom {
            format!("{BOM}{rendered}")
        } else {
            rendered
        })
    }
}

fn is_opening(line: &str) -> bool {
    line.trim_end() == OPENING
}

fn is_closing(line: &str) -> bool {
    CLOSINGS.contains(&line.trim_end())
}

/// Split `content` into its frontmatter block and body.
///
/// # Behavior
///
/// - A leading byte order mark is stripped and remembered
/// - No opening `---` line, or no closing `---`/`...` line: the whole
///   content is the body
/// - Delimiters found but YAML invalid: logs a warning, `error()` is set
/// - Otherwise: the parsed YAML and the body after the closing line
///
/// An empty block (`---\n---`) parses as YAML null.
///
/// # Example
///
/// ```rust
/// use halias_content::markdown::extract_frontmatter;
///
/// let result = extract_frontmatter("# Just Markdown");
/// assert!(!result.had_delimiters());
/// assert_eq!(result.body(), "# Just Markdown");
/// ```
pub fn extract_frontmatter(content: &str) -> Frontmatter<'_> {
    let (bom, content) = match content.strip_prefix(BOM) {
        Some(rest) => (true, rest),
        None => (false, content),
    };
    let Some(first_newline) = content.find('\n') else {
        return Frontmatter::absent(content, bom);
    };
    if !is_opening(&content[..first_newline]) {
        return Frontmatter::absent(content, bom);
    }

    let block = &content[first_newline + 1..];
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if is_closing(line) {
            let yaml = &block[..offset];
            let body = &block[offset + line.len()..];
            return match serde_yaml::from_str::<Value>(yaml) {
                Ok(value) => Frontmatter::parsed(value, body, bom),
                Err(e) => {
                    log::warn!("Failed to parse frontmatter YAML: {e}");
                    Frontmatter::invalid(e.to_string(), body, bom)
                }
            };
        }
        offset += line.len();
    }

    log::warn!("Frontmatter opening delimiter found but no closing delimiter");
    Frontmatter::absent(content, bom)
}

/// Render `mapping` as a frontmatter block followed by `body`.
///
/// # Example
///
/// ```rust
/// use halias_content::markdown::render_with_frontmatter;
/// use serde_yaml::{Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert(Value::from("title"), Value::from("Notes"));
///
/// let note = render_with_frontmatter(&mapping, "# Notes\n").unwrap();
/// assert_eq!(note, "---\ntitle: Notes\n---\n# Notes\n");
/// ```
pub fn render_with_frontmatter(mapping: &Mapping, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(mapping)
        .map_err(|e| Error::parse(format!("Failed to serialize frontmatter: {e}")))?;
    Ok(format!("{OPENING}\n{yaml}{OPENING}\n{body}"))
}

// ============================================================================
// Tests
// ============================================================================
