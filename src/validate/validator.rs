//! Static checks for MDX files
//!
//! Each line outside fenced code is checked for constructs that a JSX-based
//! MDX renderer rejects or misreads. Checking never stops at the first
//! issue: every line of every file is scanned.

use super::issue::{FileValidation, IssueKind, ValidationIssue, ValidationSummary};
use crate::error::{MdxError, Result};
use crate::mdx::frontmatter::parse_frontmatter;
use crate::mdx::scan::{classify_angle_bracket, is_standalone_tag, AngleBracket, FenceState};
use crate::utils::{find_files, snippet};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static UNCLOSED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(br|hr)\s*>").expect("valid break pattern"));

const SNIPPET_LEN: usize = 60;

/// Validate MDX text, returning issues in line order
pub fn validate_text(content: &str) -> Vec<ValidationIssue> {
    let lines: Vec<&str> = content.lines().collect();
    let (_, body_start) = parse_frontmatter(&lines);
    let mut issues = Vec::new();
    let mut fence = FenceState::default();

    for (idx, line) in lines.iter().enumerate().skip(body_start) {
        if fence.step(line) {
            continue;
        }
        let lineno = idx + 1;

        if has_unescaped_braces(line) {
            issues.push(ValidationIssue::at_line(
                lineno,
                IssueKind::UnescapedBrace,
                format!("unescaped curly braces: {}", snippet(line, SNIPPET_LEN)),
            ));
        }
        if has_unclosed_break(line) {
            issues.push(ValidationIssue::at_line(
                lineno,
                IssueKind::UnclosedBreak,
                "unclosed <br> tag (needs <br />)",
            ));
        }
        if has_html_comment(line) {
            issues.push(ValidationIssue::at_line(
                lineno,
                IssueKind::HtmlComment,
                "HTML comment outside code block",
            ));
        }
        if has_bare_angle_brackets(line) {
            issues.push(ValidationIssue::at_line(
                lineno,
                IssueKind::BareAngleBracket,
                format!("possible bare angle brackets: {}", snippet(line, SNIPPET_LEN)),
            ));
        }
    }

    if fence.in_code() {
        issues.push(ValidationIssue::file_level(
            IssueKind::UnclosedCodeBlock,
            "Unclosed code block (mismatched ``` fences)",
        ));
    }

    issues
}

/// Validate a single MDX file
pub fn validate_file(path: &Path) -> Result<Vec<ValidationIssue>> {
    let content = std::fs::read_to_string(path).map_err(|e| MdxError::read(path, e))?;
    Ok(validate_text(&content))
}

/// Validate every `.mdx` file under `dir`. A missing directory is an error.
pub fn validate_dir(dir: &Path) -> Result<ValidationSummary> {
    let mut summary = ValidationSummary::new(dir);
    for path in find_files(dir, "mdx")? {
        let issues = validate_file(&path)?;
        log::debug!("{}: {} issue(s)", path.display(), issues.len());
        summary.files.push(FileValidation { path, issues });
    }
    Ok(summary)
}

/// A `{` or `}` outside inline code without a preceding backslash.
/// Standalone tag lines may carry JSX expressions and are exempt.
pub fn has_unescaped_braces(line: &str) -> bool {
    if is_standalone_tag(line) {
        return false;
    }
    let mut in_code_span = false;
    let mut prev = None;
    for c in line.chars() {
        match c {
            '`' => in_code_span = !in_code_span,
            '{' | '}' if !in_code_span && prev != Some('\\') => return true,
            _ => {}
        }
        prev = Some(c);
    }
    false
}

pub fn has_unclosed_break(line: &str) -> bool {
    UNCLOSED_BREAK.is_match(line)
}

pub fn has_html_comment(line: &str) -> bool {
    line.contains("<!--") || line.contains("-->")
}

/// A `<...>` outside inline code that is not a known tag, autolink or link
/// destination
pub fn has_bare_angle_brackets(line: &str) -> bool {
    let mut in_code_span = false;
    for (i, c) in line.char_indices() {
        match c {
            '`' => in_code_span = !in_code_span,
            '<' if !in_code_span => {
                if let AngleBracket::Bracketed(_) = classify_angle_bracket(line, i) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(content: &str) -> Vec<(Option<usize>, IssueKind)> {
        validate_text(content)
            .into_iter()
            .map(|i| (i.line, i.kind))
            .collect()
    }

    #[test]
    fn test_clean_document() {
        let content = "---\ntitle: \"A {b} <C>\"\n---\n\nText \\{x\\} with `{code}` and <br />\n";
        assert!(validate_text(content).is_empty());
    }

    #[test]
    fn test_unescaped_braces() {
        assert_eq!(
            kinds("line one\nvalue {x}\n"),
            vec![(Some(2), IssueKind::UnescapedBrace)]
        );
        assert!(!has_unescaped_braces(r"escaped \{x\}"));
        assert!(!has_unescaped_braces("`{in code}`"));
        assert!(!has_unescaped_braces(r#"<div style={{margin: "auto"}}>"#));
    }

    #[test]
    fn test_unclosed_break() {
        assert!(has_unclosed_break("a<br>b"));
        assert!(has_unclosed_break("a<br >b"));
        assert!(!has_unclosed_break("a<br />b"));
        assert!(!has_unclosed_break("a<br/>b"));
    }

    #[test]
    fn test_html_comment() {
        assert_eq!(
            kinds("<!-- note -->\ntrailing -->\n"),
            vec![
                (Some(1), IssueKind::HtmlComment),
                (Some(1), IssueKind::BareAngleBracket),
                (Some(2), IssueKind::HtmlComment)
            ]
        );
    }

    #[test]
    fn test_mid_line_arrow_is_flagged() {
        assert!(has_html_comment("step one --> step two"));
    }

    #[test]
    fn test_bare_angle_brackets() {
        assert!(has_bare_angle_brackets("Use List<String> for results"));
        assert!(!has_bare_angle_brackets("Use List`<String>` for results"));
        assert!(!has_bare_angle_brackets("<div>known</div>"));
        assert!(!has_bare_angle_brackets("see <https://spring.io>"));
        assert!(!has_bare_angle_brackets("a &lt; b"));
        assert!(!has_bare_angle_brackets("a < b with no close"));
    }

    #[test]
    fn test_code_blocks_skipped() {
        let content = "```java\nMap<String, {x}> m; <!-- c -->\n```\n";
        assert!(validate_text(content).is_empty());
    }

    #[test]
    fn test_unclosed_code_block() {
        let issues = validate_text("text\n```\ncode {x}\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnclosedCodeBlock);
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn test_multiple_issues_same_line() {
        let issues = validate_text("bad {x} <br> <Tabs>\n");
        let found: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            found,
            vec![
                IssueKind::UnescapedBrace,
                IssueKind::UnclosedBreak,
                IssueKind::BareAngleBracket
            ]
        );
    }

    #[test]
    fn test_issue_message_snippet() {
        let line = format!("{{x}} {}", "y".repeat(100));
        let issues = validate_text(&line);
        assert_eq!(
            issues[0].message,
            format!("unescaped curly braces: {}", &line[..60])
        );
    }

    #[test]
    fn test_unclosed_frontmatter_is_scanned() {
        let issues = validate_text("---\ntitle: {oops}\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(2));
    }
}
