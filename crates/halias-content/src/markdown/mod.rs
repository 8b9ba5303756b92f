//! Markdown parsing and frontmatter handling.
//!
//! - [`frontmatter`]: YAML frontmatter extraction and rendering
//! - [`parser`]: Heading extraction
//! - [`helpers`]: Alias string parsing
//!
//! These functions work on plain strings and `serde_yaml` values; the
//! [`crate::note`] and [`crate::vault`] modules build the alias workflow on
//! top of them.

pub mod frontmatter;
pub mod helpers;
pub mod parser;

// Re-export key types and functions
pub use frontmatter::{Frontmatter, extract_frontmatter, render_with_frontmatter};
pub use helpers::parse_alias_string;
pub use parser::extract_headings;
