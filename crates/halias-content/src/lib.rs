//! Markdown notes on disk for Halias.
//!
//! This crate turns a directory of markdown files into a host the
//! `halias-core` plugin can run against. It parses headings with
//! `pulldown-cmark` and reads and rewrites YAML frontmatter with
//! `serde_yaml`.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter handling
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction and rendering
//!   - [`markdown::parser`]: Heading extraction
//!   - [`markdown::helpers`]: Alias string parsing
//! - [`note`]: Typed view of a note's frontmatter
//! - [`vault`]: Filesystem-backed host
//!
//! # Example
//!
//! ```rust
//! use halias_content::markdown::{extract_frontmatter, extract_headings};
//! use halias_content::note::NoteFrontmatter;
//!
//! let content = "---\naliases: Intro\n---\n\n# Introduction\n";
//! let frontmatter = extract_frontmatter(content);
//! let note = NoteFrontmatter::from_value(frontmatter.value().cloned()).unwrap();
//!
//! assert_eq!(note.aliases().as_slice(), ["Intro"]);
//! assert_eq!(extract_headings(frontmatter.body())[0].text, "Introduction");
//! ```

pub mod markdown;
pub mod note;
pub mod vault;

// Re-export commonly used types
pub use markdown::{Frontmatter, extract_frontmatter, extract_headings, render_with_frontmatter};
pub use note::NoteFrontmatter;
pub use vault::Vault;
