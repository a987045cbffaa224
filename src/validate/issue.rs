//! Validation issue and summary types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Type of structural problem found in an MDX file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// `{` or `}` outside code that is not backslash-escaped
    UnescapedBrace,
    /// `<br>` or `<hr>` without a trailing slash
    UnclosedBreak,
    /// HTML comment marker outside code
    HtmlComment,
    /// `<...>` that is not known markup
    BareAngleBracket,
    /// Code fence opened but never closed
    UnclosedCodeBlock,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::UnescapedBrace => write!(f, "unescaped_brace"),
            IssueKind::UnclosedBreak => write!(f, "unclosed_break"),
            IssueKind::HtmlComment => write!(f, "html_comment"),
            IssueKind::BareAngleBracket => write!(f, "bare_angle_bracket"),
            IssueKind::UnclosedCodeBlock => write!(f, "unclosed_code_block"),
        }
    }
}

/// A single problem detected in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Line number (1-indexed); absent for file-level issues
    pub line: Option<usize>,
    pub kind: IssueKind,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    pub fn at_line(line: usize, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            kind,
            message: message.into(),
        }
    }

    pub fn file_level(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            line: None,
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Issues found in one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileValidation {
    pub path: PathBuf,
    pub issues: Vec<ValidationIssue>,
}

impl FileValidation {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Result of validating a directory of MDX files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Directory that was scanned
    pub directory: PathBuf,
    /// Timestamp of the run
    pub timestamp: String,
    /// Every checked file, in path order
    pub files: Vec<FileValidation>,
}

impl ValidationSummary {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            files: Vec::new(),
        }
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Files with at least one issue
    pub fn failures(&self) -> impl Iterator<Item = &FileValidation> {
        self.files.iter().filter(|f| !f.passed())
    }

    pub fn files_with_issues(&self) -> usize {
        self.failures().count()
    }

    pub fn passed(&self) -> bool {
        self.files_with_issues() == 0
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("MDX Validation Report\n");
        output.push_str("=====================\n");
        output.push_str(&format!("Directory: {}\n", self.directory.display()));
        output.push_str(&format!("Date:      {}\n\n", self.timestamp));

        for file in self.failures() {
            output.push_str(&format!("FAIL: {}\n", file.path.display()));
            for issue in &file.issues {
                output.push_str(&format!("  {}\n", issue));
            }
        }
        if !self.passed() {
            output.push('\n');
        }

        output.push_str(&format!(
            "Validated {} files, {} with issues.\n",
            self.files_checked(),
            self.files_with_issues()
        ));
        output
    }
}
