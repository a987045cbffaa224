//! Converter and validator configuration
//!
//! Every field has a default, so an absent or partial config file is fine.

use crate::error::{MdxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A title prefix rewrite used when deriving the sidebar title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePrefix {
    /// Regular expression, anchored at the start of the title
    pub pattern: String,
    /// Replacement text (empty removes the prefix)
    #[serde(default)]
    pub replacement: String,
}

impl TitlePrefix {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Options for markdown to MDX conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Title used when the source has no `title` field
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Maximum sidebar title length before truncation
    #[serde(default = "default_sidebar_title_max")]
    pub sidebar_title_max: usize,

    /// Word cuts before this index fall back to a hard cut
    #[serde(default = "default_sidebar_title_min_cut")]
    pub sidebar_title_min_cut: usize,

    /// Maximum description length before truncation
    #[serde(default = "default_description_max")]
    pub description_max: usize,

    /// Word cuts before this index fall back to a hard cut
    #[serde(default = "default_description_min_cut")]
    pub description_min_cut: usize,

    /// A body line must be longer than this to become the description
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,

    /// Marker appended to truncated text
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Prefix rewrites applied in order to derive the sidebar title
    #[serde(default = "default_title_prefixes")]
    pub title_prefixes: Vec<TitlePrefix>,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_sidebar_title_max() -> usize {
    35
}

fn default_sidebar_title_min_cut() -> usize {
    15
}

fn default_description_max() -> usize {
    160
}

fn default_description_min_cut() -> usize {
    80
}

fn default_description_min_len() -> usize {
    20
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_title_prefixes() -> Vec<TitlePrefix> {
    vec![
        TitlePrefix::new(r"^Spring AI\s*:?\s*", ""),
        TitlePrefix::new(r"^Spring Tips:\s*", ""),
        TitlePrefix::new(r"^AI Meets Spring Petclinic:\s*", "Petclinic: "),
    ]
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            sidebar_title_max: default_sidebar_title_max(),
            sidebar_title_min_cut: default_sidebar_title_min_cut(),
            description_max: default_description_max(),
            description_min_cut: default_description_min_cut(),
            description_min_len: default_description_min_len(),
            ellipsis: default_ellipsis(),
            title_prefixes: default_title_prefixes(),
        }
    }
}

/// Options for MDX validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// External link checker run after static checks pass (empty disables it)
    #[serde(default = "default_link_checker")]
    pub link_checker: Vec<String>,
}

fn default_link_checker() -> Vec<String> {
    vec!["mintlify".to_string(), "broken-links".to_string()]
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            link_checker: default_link_checker(),
        }
    }
}

/// Top-level config file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertOptions,
    #[serde(default)]
    pub validate: ValidateOptions,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MdxError::read(path, e))?;
        Self::from_toml(&content).map_err(|message| MdxError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
