//! MDX validation module
//!
//! Re-scans MDX files read-only and reports constructs that would break a
//! JSX-based renderer:
//! - unescaped curly braces
//! - unclosed `<br>` tags
//! - leftover HTML comments
//! - bare angle brackets
//! - unterminated code fences

mod issue;
mod link_check;
mod validator;

pub use issue::{FileValidation, IssueKind, ValidationIssue, ValidationSummary};
pub use link_check::{run_link_checker, LinkCheck};
pub use validator::{
    has_bare_angle_brackets, has_html_comment, has_unclosed_break, has_unescaped_braces,
    validate_dir, validate_file, validate_text,
};
