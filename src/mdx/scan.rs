//! Line-level scanning shared by the rewriter and the validator

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tag names treated as real HTML rather than bare angle brackets
pub static KNOWN_HTML_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "img", "iframe", "div", "span", "br", "hr", "p", "a", "b", "i", "em", "strong", "table",
        "thead", "tbody", "tr", "th", "td", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6",
        "pre", "code", "blockquote", "video", "source", "details", "summary", "sup", "sub",
        "section", "article", "nav", "header", "footer", "figure", "figcaption",
    ]
    .into_iter()
    .collect()
});

static TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?([a-zA-Z][a-zA-Z0-9]*)[\s>!/]").expect("valid tag pattern"));

/// A bare `<` closed within this many characters is bracketed as inline code
pub const BRACKET_WINDOW: usize = 60;

/// Whether the line opens or closes a fenced code block
pub fn is_code_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Whether the trimmed line starts with known markup and ends with `>`,
/// e.g. `<div style={{...}}>`. Unknown tags such as `<Tabs>` do not count,
/// since they are quoted as bare brackets.
pub fn is_standalone_tag(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('<')
        && trimmed.ends_with('>')
        && classify_angle_bracket(trimmed, 0) == AngleBracket::Markup
}

/// Tracks fenced code blocks across lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    #[default]
    Prose,
    Code,
}

impl FenceState {
    /// Advance over `line`. Returns true when the line is fence or code
    /// content and must not be touched.
    pub fn step(&mut self, line: &str) -> bool {
        if is_code_fence(line) {
            *self = match self {
                FenceState::Prose => FenceState::Code,
                FenceState::Code => FenceState::Prose,
            };
            return true;
        }
        *self == FenceState::Code
    }

    pub fn in_code(&self) -> bool {
        *self == FenceState::Code
    }
}

/// How a `<` in prose should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleBracket {
    /// Known tag, autolink or link destination
    Markup,
    /// Bare bracket closed by a `>`; the value is the byte length of `<...>`
    Bracketed(usize),
    /// Bare bracket with no `>` nearby
    Lone,
}

/// Classify the `<` at byte offset `at` of `line`
pub fn classify_angle_bracket(line: &str, at: usize) -> AngleBracket {
    let rest = &line[at..];

    if let Some(caps) = TAG_START.captures(rest) {
        if KNOWN_HTML_TAGS.contains(caps[1].to_ascii_lowercase().as_str()) {
            return AngleBracket::Markup;
        }
    }
    if rest.starts_with("<http") || rest.starts_with("<mailto") {
        return AngleBracket::Markup;
    }
    if matches!(line[..at].chars().next_back(), Some('(' | '"')) {
        return AngleBracket::Markup;
    }

    // a span crossing a backtick would flip inline code boundaries
    match rest.find('>') {
        Some(close)
            if close > 0
                && !rest[..close].contains('`')
                && rest[..close].chars().count() < BRACKET_WINDOW =>
        {
            AngleBracket::Bracketed(close + 1)
        }
        _ => AngleBracket::Lone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fence_detection() {
        assert!(is_code_fence("```java"));
        assert!(is_code_fence("   ```"));
        assert!(!is_code_fence("text ```"));
    }

    #[test]
    fn test_fence_state() {
        let mut state = FenceState::default();
        assert!(!state.step("prose"));
        assert!(state.step("```"));
        assert!(state.in_code());
        assert!(state.step("let x = {1};"));
        assert!(state.step("```"));
        assert!(!state.in_code());
        assert!(!state.step("prose again"));
    }

    #[test]
    fn test_standalone_tag() {
        assert!(is_standalone_tag("  <div style={{margin: \"auto\"}}>"));
        assert!(is_standalone_tag("<img src=\"a.png\" />"));
        assert!(!is_standalone_tag("text <b>bold</b> text"));
    }

    #[test]
    fn test_unknown_tag_line_is_not_standalone() {
        assert!(!is_standalone_tag("<Tabs>{x}</Tabs>"));
        assert!(!is_standalone_tag("<Note> see {config} </Note>"));
        assert!(!is_standalone_tag("<!-- note -->"));
    }

    #[test]
    fn test_known_tags_are_markup() {
        assert_eq!(classify_angle_bracket("<div>", 0), AngleBracket::Markup);
        assert_eq!(classify_angle_bracket("</DIV>", 0), AngleBracket::Markup);
        assert_eq!(classify_angle_bracket("<img src=\"x\" />", 0), AngleBracket::Markup);
        assert_eq!(classify_angle_bracket("<br/>", 0), AngleBracket::Markup);
    }

    #[test]
    fn test_autolinks_and_destinations_are_markup() {
        assert_eq!(
            classify_angle_bracket("<https://spring.io>", 0),
            AngleBracket::Markup
        );
        assert_eq!(
            classify_angle_bracket("<mailto:dev@spring.io>", 0),
            AngleBracket::Markup
        );
        assert_eq!(
            classify_angle_bracket("[x](<My Notes.md>)", 4),
            AngleBracket::Markup
        );
    }

    #[test]
    fn test_generic_type_is_bracketed() {
        let line = "Use List<String> for results";
        assert_eq!(classify_angle_bracket(line, 8), AngleBracket::Bracketed(8));
    }

    #[test]
    fn test_unknown_tag_is_bracketed() {
        assert_eq!(classify_angle_bracket("<Tabs>", 0), AngleBracket::Bracketed(6));
    }

    #[test]
    fn test_lone_bracket() {
        assert_eq!(classify_angle_bracket("a < b", 2), AngleBracket::Lone);
        let far = format!("<{}>", "x".repeat(70));
        assert_eq!(classify_angle_bracket(&far, 0), AngleBracket::Lone);
        assert_eq!(classify_angle_bracket("<>", 0), AngleBracket::Bracketed(2));
    }

    #[test]
    fn test_bracket_across_code_span_is_lone() {
        assert_eq!(classify_angle_bracket("a < b `{x}` c > d", 2), AngleBracket::Lone);
    }
}
