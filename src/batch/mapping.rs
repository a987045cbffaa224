//! Topic mapping: source slug to destination path
//!
//! The mapping is a properties file maintained outside the converter, e.g.
//!
//! ```text
//! # slug = destination (relative to the output dir, no extension)
//! spring-ai-agents = agents/spring-ai-agents
//! mcp-intro: mcp/introduction
//! ```

use crate::error::{MdxError, Result};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicMapping {
    entries: BTreeMap<String, String>,
}

impl TopicMapping {
    /// Load a mapping from a properties file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MdxError::read(path, e))?;
        let mapping = Self::parse(&text);
        log::debug!("Loaded {} mapping(s) from {}", mapping.len(), path.display());
        Ok(mapping)
    }

    /// Parse properties text.
    ///
    /// `#` and `!` start comment lines; the key ends at the first `=`, `:` or
    /// whitespace; a trailing `\` continues the value on the next line.
    pub fn parse(text: &str) -> Self {
        let mut mapping = Self::default();
        let mut logical = String::new();

        for raw in text.lines() {
            let line = raw.trim_start();
            if logical.is_empty()
                && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
            {
                continue;
            }
            if let Some(continued) = line.strip_suffix('\\') {
                logical.push_str(continued);
                continue;
            }
            logical.push_str(line);
            mapping.insert_entry(&logical);
            logical.clear();
        }
        if !logical.is_empty() {
            mapping.insert_entry(&logical);
        }

        mapping
    }

    fn insert_entry(&mut self, line: &str) {
        let Some((key, value)) = split_entry(line) else {
            return;
        };
        if value.is_empty() {
            log::warn!("Ignoring mapping for {} with empty destination", key);
            return;
        }
        self.insert(key, value);
    }

    pub fn insert(&mut self, slug: &str, target: &str) {
        self.entries.insert(slug.to_string(), target.to_string());
    }

    /// Destination for `slug`, if mapped
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TopicMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let end = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let key = &line[..end];
    if key.is_empty() {
        return None;
    }
    let rest = line[end..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    Some((key, rest.trim()))
}
