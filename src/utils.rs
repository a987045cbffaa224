use crate::error::{MdxError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Files under `dir` (recursively) with the given extension, in sorted order.
///
/// `dir` must be an existing directory.
pub(crate) fn find_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(dir).map_err(|e| MdxError::read(dir, e))?;
    if !metadata.is_dir() {
        return Err(MdxError::read(dir, io::Error::other("not a directory")));
    }

    let root = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/**/*.{}", root.trim_end_matches('/'), extension);
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write `content` to `path`, creating parent directories as needed
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| MdxError::write(parent, e))?;
        }
    }
    std::fs::write(path, content).map_err(|e| MdxError::write(path, e))
}

/// First `max` characters of the trimmed line, for issue messages
pub(crate) fn snippet(line: &str, max: usize) -> String {
    line.trim().chars().take(max).collect()
}
