//! Markdown to MDX converter
//!
//! Parses frontmatter, derives page metadata, rewrites the body and renders
//! a document with Mintlify frontmatter.

use super::frontmatter::{escape_yaml_string, parse_document};
use super::metadata::MetadataRules;
use super::rewrite::rewrite_body;
use crate::error::{MdxError, Result};
use crate::options::ConvertOptions;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Frontmatter of a converted page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MdxFrontmatter {
    pub title: String,
    pub sidebar_title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl fmt::Display for MdxFrontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: \"{}\"", escape_yaml_string(&self.title))?;
        writeln!(
            f,
            "sidebarTitle: \"{}\"",
            escape_yaml_string(&self.sidebar_title)
        )?;
        if let Some(description) = &self.description {
            writeln!(f, "description: \"{}\"", escape_yaml_string(description))?;
        }
        if let Some(author) = &self.author {
            writeln!(f, "author: {}", author)?;
        }
        if let Some(date) = &self.date {
            writeln!(f, "date: {}", date)?;
        }
        writeln!(f, "---")
    }
}

/// A converted MDX document
#[derive(Debug, Clone)]
pub struct MdxDocument {
    pub frontmatter: MdxFrontmatter,
    /// Rewritten body lines
    pub body: Vec<String>,
}

impl MdxDocument {
    /// Render the full MDX text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MdxDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frontmatter)?;
        for line in &self.body {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Markdown to MDX converter
#[derive(Debug, Clone)]
pub struct MdxConverter {
    options: ConvertOptions,
    rules: MetadataRules,
}

impl MdxConverter {
    /// Create a converter, compiling the configured title prefixes
    pub fn new(options: ConvertOptions) -> Result<Self> {
        let rules = MetadataRules::new(&options)?;
        Ok(Self { options, rules })
    }

    /// Convert markdown text.
    ///
    /// `date_hint` is used when the source has no `publishedAt` field.
    pub fn convert(&self, markdown: &str, date_hint: Option<&str>) -> MdxDocument {
        let doc = parse_document(markdown);
        let fm = &doc.frontmatter;

        let title = fm
            .get("title")
            .unwrap_or(&self.options.default_title)
            .to_string();
        let sidebar_title = self.rules.sidebar_title(&title);
        let description = self.rules.description(&doc.lines, doc.body_start);
        let date = fm
            .get("publishedAt")
            .or(date_hint)
            .map(str::to_string);

        let frontmatter = MdxFrontmatter {
            title,
            sidebar_title,
            description,
            author: fm.get("author").map(str::to_string),
            date,
        };

        MdxDocument {
            frontmatter,
            body: rewrite_body(doc.body()),
        }
    }

    /// Read and convert a markdown file
    pub fn convert_file(&self, path: &Path, date_hint: Option<&str>) -> Result<MdxDocument> {
        let markdown = std::fs::read_to_string(path).map_err(|e| MdxError::read(path, e))?;
        log::debug!("Converting {}", path.display());
        Ok(self.convert(&markdown, date_hint))
    }
}
