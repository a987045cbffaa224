//! Batch conversion driven by a topic mapping
//!
//! Every markdown file under an input directory is looked up by its file
//! stem in the mapping. Mapped files are converted and written to
//! `<output-dir>/<destination>.mdx`; unmapped files are skipped with a
//! warning.

mod mapping;
mod report;
mod runner;

pub use mapping::TopicMapping;
pub use report::BatchReport;
pub use runner::{BatchConverter, BatchOutcome, ConvertedEntry, SkippedEntry};
