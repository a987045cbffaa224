//! Error type shared by the converter, validator and batch orchestrator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdxError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] glob::GlobError),
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("invalid title prefix pattern `{pattern}`: {source}")]
    TitlePrefix {
        pattern: String,
        source: regex::Error,
    },
}

impl MdxError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MdxError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MdxError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MdxError>;
