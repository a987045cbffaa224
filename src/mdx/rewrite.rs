//! Body rewriting: makes markdown prose safe for a JSX-based MDX renderer
//!
//! Lines are processed one at a time. Fenced code is passed through
//! untouched; every other line runs through the passes of [`rewrite_line`].

use super::scan::{classify_angle_bracket, is_standalone_tag, AngleBracket, FenceState};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static IMG_UNCLOSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img\s([^>]*[^/])>").expect("valid img pattern"));
static SOURCE_UNCLOSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<source\s([^>]*[^/])>").expect("valid source pattern"));
static BREAK_UNCLOSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(br|hr)\s*>").expect("valid break pattern"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--.*?-->").expect("valid comment pattern"));
static STRAY_COMMENT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-->\s*$").expect("valid comment close pattern"));
static UNTERMINATED_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--.*$").expect("valid comment open pattern"));
static STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="([^"]*)""#).expect("valid style pattern"));

/// Rewrite body lines, leaving fenced code blocks byte-for-byte intact
pub fn rewrite_body(lines: &[&str]) -> Vec<String> {
    let mut fence = FenceState::default();
    lines
        .iter()
        .map(|line| {
            if fence.step(line) {
                line.to_string()
            } else {
                rewrite_line(line)
            }
        })
        .collect()
}

/// Rewrite a single prose line.
///
/// Tags and comments are fixed before braces and brackets are escaped, since
/// their markers would otherwise be escaped too.
pub fn rewrite_line(line: &str) -> String {
    let line = close_void_elements(line);
    let line = strip_html_comments(&line);
    let line = style_to_jsx(&line);
    let line = escape_curly_braces(&line);
    escape_angle_brackets(&line)
}

/// `<img ...>`, `<source ...>`, `<br>` and `<hr>` become self-closing
pub fn close_void_elements(line: &str) -> String {
    let line = IMG_UNCLOSED.replace_all(line, "<img ${1} />");
    let line = BREAK_UNCLOSED.replace_all(&line, "<${1} />");
    SOURCE_UNCLOSED
        .replace_all(&line, "<source ${1} />")
        .into_owned()
}

/// Drop HTML comments, including stray fragments of multi-line ones
pub fn strip_html_comments(line: &str) -> String {
    let line = COMMENT.replace_all(line, "");
    let line = STRAY_COMMENT_CLOSE.replace(&line, "");
    UNTERMINATED_COMMENT.replace(&line, "").into_owned()
}

/// `style="font-size: 12px"` becomes `style={{fontSize: "12px"}}`
pub fn style_to_jsx(line: &str) -> String {
    STYLE_ATTR
        .replace_all(line, |caps: &Captures| {
            format!("style={{{}}}", css_to_object(&caps[1]))
        })
        .into_owned()
}

/// Convert CSS declarations to a JS object literal
pub fn css_to_object(css: &str) -> String {
    let entries: Vec<String> = css
        .split(';')
        .map(str::trim)
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| format!("{}: \"{}\"", camel_case(prop.trim()), value.trim()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// `font-size` becomes `fontSize`
pub fn camel_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len());
    let mut upper_next = false;
    for c in prop.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Backslash-escape `{` and `}` outside inline code spans.
///
/// Standalone tag lines keep their JSX expressions. Braces that are already
/// escaped are left alone.
pub fn escape_curly_braces(line: &str) -> String {
    if is_standalone_tag(line) {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut in_code_span = false;
    let mut prev = None;
    for c in line.chars() {
        match c {
            '`' => in_code_span = !in_code_span,
            '{' | '}' if !in_code_span && prev != Some('\\') => out.push('\\'),
            _ => {}
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Quote or entity-encode `<` that is not part of known markup.
///
/// `List<String>` becomes ``List`<String>` ``; a `<` with no closing `>`
/// nearby becomes `&lt;`.
pub fn escape_angle_brackets(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut in_code_span = false;
    let mut i = 0;
    while let Some(c) = line[i..].chars().next() {
        match c {
            '`' => {
                in_code_span = !in_code_span;
                out.push(c);
            }
            '<' if !in_code_span => match classify_angle_bracket(line, i) {
                AngleBracket::Markup => out.push(c),
                AngleBracket::Bracketed(len) => {
                    out.push('`');
                    out.push_str(&line[i..i + len]);
                    out.push('`');
                    i += len;
                    continue;
                }
                AngleBracket::Lone => out.push_str("&lt;"),
            },
            _ => out.push(c),
        }
        i += c.len_utf8();
    }
    out
}
