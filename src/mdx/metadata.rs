//! Derived page metadata: sidebar title, description and publication date

use crate::error::{MdxError, Result};
use crate::options::{ConvertOptions, TitlePrefix};
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DATE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d{4})/(\d{2})/").expect("valid date pattern"));

/// Word-boundary truncation limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Maximum length in characters before the ellipsis
    pub max: usize,
    /// Cuts at a space before this index fall back to a hard cut
    pub min_cut: usize,
    pub ellipsis: String,
}

impl Truncation {
    pub fn new(max: usize, min_cut: usize, ellipsis: &str) -> Self {
        Self {
            max,
            min_cut,
            ellipsis: ellipsis.to_string(),
        }
    }

    /// Truncate `text` to at most `max` characters plus the ellipsis,
    /// preferring the last space at or before `max`.
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= self.max {
            return text.to_string();
        }
        let cut = chars[..=self.max]
            .iter()
            .rposition(|c| *c == ' ')
            .filter(|cut| *cut >= self.min_cut)
            .unwrap_or(self.max);
        let mut out: String = chars[..cut].iter().collect();
        out.push_str(&self.ellipsis);
        out
    }
}

/// A compiled title prefix rewrite
#[derive(Debug, Clone)]
pub struct PrefixRule {
    regex: Regex,
    replacement: String,
}

impl PrefixRule {
    /// Compile a configured prefix, anchoring it at the start of the title
    pub fn compile(prefix: &TitlePrefix) -> Result<Self> {
        let anchored = if prefix.pattern.starts_with('^') {
            prefix.pattern.clone()
        } else {
            format!("^(?:{})", prefix.pattern)
        };
        let regex = Regex::new(&anchored).map_err(|source| MdxError::TitlePrefix {
            pattern: prefix.pattern.clone(),
            source,
        })?;
        Ok(Self {
            regex,
            replacement: prefix.replacement.clone(),
        })
    }

    fn apply(&self, title: &str) -> String {
        self.regex
            .replacen(title, 1, regex::NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Rules for deriving titles and descriptions
#[derive(Debug, Clone)]
pub struct MetadataRules {
    prefixes: Vec<PrefixRule>,
    sidebar: Truncation,
    description: Truncation,
    description_min_len: usize,
}

impl MetadataRules {
    pub fn new(options: &ConvertOptions) -> Result<Self> {
        let prefixes = options
            .title_prefixes
            .iter()
            .map(PrefixRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            prefixes,
            sidebar: Truncation::new(
                options.sidebar_title_max,
                options.sidebar_title_min_cut,
                &options.ellipsis,
            ),
            description: Truncation::new(
                options.description_max,
                options.description_min_cut,
                &options.ellipsis,
            ),
            description_min_len: options.description_min_len,
        })
    }

    /// Short title for navigation: known prefixes stripped, then truncated
    pub fn sidebar_title(&self, title: &str) -> String {
        let stripped = self
            .prefixes
            .iter()
            .fold(title.to_string(), |t, rule| rule.apply(&t));
        self.sidebar.apply(stripped.trim())
    }

    /// First prose line of the body long enough to describe the page
    pub fn description(&self, lines: &[&str], body_start: usize) -> Option<String> {
        lines
            .iter()
            .skip(body_start)
            .map(|line| line.trim())
            .filter(|line| !is_non_prose(line))
            .find(|line| line.chars().count() > self.description_min_len)
            .map(|line| self.description.apply(line))
    }
}

fn is_non_prose(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('#')
        || line.starts_with('<')
        || line.starts_with('!')
        || line.starts_with("```")
}

/// Infer a `YYYY-MM-01` date from a `/YYYY/MM/` segment of the source path
pub fn date_from_path(path: &Path) -> Option<String> {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let caps = DATE_SEGMENT.captures(&normalized)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.format("%Y-%m-%d").to_string())
}
