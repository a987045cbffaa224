//! Frontmatter extraction for `---` delimited documents

/// Frontmatter delimiter line
pub const DELIMITER: &str = "---";

/// Ordered key/value pairs from a frontmatter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. A repeated key keeps its position and takes the new value.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A document split into frontmatter and body
#[derive(Debug, Clone)]
pub struct ParsedDocument<'a> {
    pub frontmatter: Frontmatter,
    /// All lines of the document, frontmatter included
    pub lines: Vec<&'a str>,
    /// Index of the first body line
    pub body_start: usize,
}

impl<'a> ParsedDocument<'a> {
    pub fn body(&self) -> &[&'a str] {
        &self.lines[self.body_start..]
    }
}

/// Split `content` into lines and parse its frontmatter
pub fn parse_document(content: &str) -> ParsedDocument<'_> {
    let lines: Vec<&str> = content.lines().collect();
    let (frontmatter, body_start) = parse_frontmatter(&lines);
    ParsedDocument {
        frontmatter,
        lines,
        body_start,
    }
}

/// Parse a frontmatter block at the top of `lines`.
///
/// Returns the parsed pairs and the index of the first body line. Without a
/// closing delimiter the whole document is body and the mapping is empty.
pub fn parse_frontmatter(lines: &[&str]) -> (Frontmatter, usize) {
    let mut frontmatter = Frontmatter::new();

    if lines.first() != Some(&DELIMITER) {
        return (frontmatter, 0);
    }
    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| *line == DELIMITER)
        .map(|i| i + 1)
    else {
        return (frontmatter, 0);
    };

    for line in &lines[1..end] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        frontmatter.insert(key, strip_quotes(value.trim()));
    }

    (frontmatter, end + 1)
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Escape a value for a double-quoted YAML scalar
pub fn escape_yaml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
