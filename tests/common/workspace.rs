use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory tree for conversion and validation tests
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a file (and its parent directories) in the workspace
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a file from the workspace
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|_| panic!("File not found: {}", name))
    }

    /// Absolute path of a workspace entry
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Get workspace root path
    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }
}
