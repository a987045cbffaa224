//! Batch conversion of a markdown tree into a mapped MDX tree

use super::mapping::TopicMapping;
use crate::error::{MdxError, Result};
use crate::mdx::{date_from_path, MdxConverter};
use crate::utils::{find_files, write_file};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source document that was converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedEntry {
    pub slug: String,
    pub source: PathBuf,
    /// Mapped destination, relative to the output dir, without extension
    pub target: String,
    /// Written MDX file
    pub output: PathBuf,
    /// Publication date written to the frontmatter
    pub date: Option<String>,
}

/// A source document without a mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub slug: String,
    pub source: PathBuf,
}

/// Converted and skipped documents of one batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub converted: Vec<ConvertedEntry>,
    pub skipped: Vec<SkippedEntry>,
}

/// Converts every mapped markdown file under an input directory
pub struct BatchConverter {
    converter: MdxConverter,
    mapping: TopicMapping,
}

impl BatchConverter {
    pub fn new(converter: MdxConverter, mapping: TopicMapping) -> Self {
        Self { converter, mapping }
    }

    /// Output file for a mapped destination
    pub fn output_path(output_dir: &Path, target: &str) -> PathBuf {
        output_dir.join(format!("{}.mdx", target))
    }

    /// Convert every `.md` file under `input_dir` into `output_dir`.
    ///
    /// Unmapped documents are skipped with a warning. A missing input
    /// directory and other I/O errors abort the run.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchOutcome> {
        let mut outcome = BatchOutcome::default();
        std::fs::create_dir_all(output_dir).map_err(|e| MdxError::write(output_dir, e))?;

        for source in find_files(input_dir, "md")? {
            let slug = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let Some(target) = self.mapping.get(&slug) else {
                log::warn!("No mapping for: {}", slug);
                outcome.skipped.push(SkippedEntry { slug, source });
                continue;
            };

            let output = Self::output_path(output_dir, target);
            let date_hint = date_from_path(&source);
            let doc = self.converter.convert_file(&source, date_hint.as_deref())?;
            write_file(&output, &doc.render())?;
            log::info!("  {} -> {}.mdx", slug, target);

            outcome.converted.push(ConvertedEntry {
                slug,
                target: target.to_string(),
                source,
                output,
                date: doc.frontmatter.date,
            });
        }

        Ok(outcome)
    }
}
