//! Markdown heading extraction.
//!
//! Headings are read with `pulldown-cmark`, so ATX (`# Title`) and setext
//! (`Title\n=====`) forms are both recognized and headings inside code blocks
//! are not. Inline formatting is stripped from the heading text.
//!
//! The input is a note body: split the frontmatter off first with
//! [`extract_frontmatter`](super::extract_frontmatter), which alone decides
//! where the block ends.
//!
//! # Example
//!
//! ```rust
//! use halias_content::markdown::extract_headings;
//!
//! let content = "# My Title\n\nText.\n\n## Section *one*";
//! let headings = extract_headings(content);
//!
//! assert_eq!(headings[0].text, "My Title");
//! assert_eq!(headings[1].text, "Section one");
//! assert_eq!(headings[1].depth, 2);
//! ```

use halias_core::Heading;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extract every heading of a note body in document order.
///
/// Headings whose text is empty after stripping formatting are skipped.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let parser = Parser::new(body);
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_depth(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, text)) = current.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        headings.push(Heading::new(text, depth));
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    log::trace!("Extracted {} headings", headings.len());
    headings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::extract_frontmatter;

    fn texts(content: &str) -> Vec<(String, u8)> {
        extract_headings(content)
            .into_iter()
            .map(|h| (h.text, h.depth))
            .collect()
    }

    #[test]
    fn test_all_levels_in_order() {
        let content = "# One\n## Two\n### Three\n#### Four\n##### Five\n###### Six\n";
        let depths: Vec<u8> = extract_headings(content).iter().map(|h| h.depth).collect();
        assert_eq!(depths, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_setext_headings() {
        let content = "Title\n=====\n\nSub\n---\n";
        assert_eq!(
            texts(content),
            [("Title".to_string(), 1), ("Sub".to_string(), 2)]
        );
    }

    #[test]
    fn test_formatting_stripped() {
        let content = "# **Bold** and `code` with [link](https://example.com)\n";
        assert_eq!(texts(content)[0].0, "Bold and code with link");
    }

    #[test]
    fn test_body_after_frontmatter() {
        let content = "---\n\ntitle: Not a heading\n---\n\n# Real\n";
        assert_eq!(
            texts(extract_frontmatter(content).body()),
            [("Real".to_string(), 1)]
        );
    }

    #[test]
    fn test_leading_rule_in_body_not_swallowed() {
        let body = "---\nText\n---\n# Real\n";
        assert_eq!(
            texts(body),
            [("Text".to_string(), 2), ("Real".to_string(), 1)]
        );
    }

    #[test]
    fn test_code_block_ignored() {
        let content = "```\n# not a heading\n```\n\n# Heading\n";
        assert_eq!(texts(content), [("Heading".to_string(), 1)]);
    }

    #[test]
    fn test_empty_heading_skipped() {
        assert!(extract_headings("#\n\n##   \n").is_empty());
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_headings("Just a paragraph.\n").is_empty());
        assert!(extract_headings("").is_empty());
    }

    #[test]
    fn test_unicode_heading() {
        assert_eq!(texts("## 音楽理論\n"), [("音楽理論".to_string(), 2)]);
    }
}
