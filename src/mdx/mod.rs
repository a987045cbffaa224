//! Markdown to MDX conversion
//!
//! The conversion runs as sequential passes over the document:
//! - frontmatter extraction (fails open on a missing closing delimiter)
//! - title, description and date derivation
//! - line-by-line body rewriting that never touches fenced code

mod converter;
pub mod frontmatter;
pub mod metadata;
pub mod rewrite;
pub mod scan;

pub use converter::{MdxConverter, MdxDocument, MdxFrontmatter};
pub use frontmatter::{parse_document, parse_frontmatter, Frontmatter, ParsedDocument};
pub use metadata::{date_from_path, MetadataRules, Truncation};
