//! Integration tests for markdown to MDX conversion

mod common;

use common::TestWorkspace;
use spring_mdx::mdx::MdxConverter;
use spring_mdx::options::{Config, ConvertOptions, TitlePrefix};
use spring_mdx::validate::validate_text;

fn converter() -> MdxConverter {
    MdxConverter::new(ConvertOptions::default()).unwrap()
}

fn convert(md: &str) -> String {
    converter().convert(md, None).render()
}

const POST: &str = r#"---
title: "Spring AI: Building Agents with {Tools}"
author: mpollack
publishedAt: 2025-01-10
---

# Overview

<!-- draft note -->
Spring AI makes tool calling with Map<String, Object> arguments simple.
<img src="diagram.png" alt="Diagram">
Line one<br>Line two

```java
Map<String, Object> args = Map.of("k", "{v}"); // <!-- kept -->
```

<div style="text-align: center">
Done.
</div>
"#;

#[test]
fn test_full_document_conversion() {
    let mdx = convert(POST);

    let expected = r#"---
title: "Spring AI: Building Agents with {Tools}"
sidebarTitle: "Building Agents with {Tools}"
description: "Spring AI makes tool calling with Map<String, Object> arguments simple."
author: mpollack
date: 2025-01-10
---

# Overview


Spring AI makes tool calling with Map`<String, Object>` arguments simple.
<img src="diagram.png" alt="Diagram" />
Line one<br />Line two

```java
Map<String, Object> args = Map.of("k", "{v}"); // <!-- kept -->
```

<div style={{textAlign: "center"}}>
Done.
</div>
"#;
    assert_eq!(mdx, expected);
}

#[test]
fn test_converted_output_validates_clean() {
    let issues = validate_text(&convert(POST));
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_braces_escaped_outside_code_only() {
    let mdx = convert("Use {placeholder} and `{inline}` here\n\n```\n{block}\n```\n");
    assert!(mdx.contains(r"Use \{placeholder\} and `{inline}` here"));
    assert!(mdx.contains("\n{block}\n"), "fenced code must be untouched");
    assert!(validate_text(&mdx).is_empty());
}

#[test]
fn test_generic_types_and_lone_brackets() {
    let mdx = convert("Returns a List<String> when a < b.\n");
    assert!(mdx.contains("Returns a List`<String>` when a &lt; b."));
    assert!(validate_text(&mdx).is_empty());
}

#[test]
fn test_custom_component_lines_validate_clean() {
    for line in ["<Tabs>{x}</Tabs>", "<Note> see {config} </Note>"] {
        let mdx = convert(&format!("{}\n", line));
        let issues = validate_text(&mdx);
        assert!(issues.is_empty(), "{:?} produced {:?}", line, issues);
    }
    assert!(convert("<Tabs>{x}</Tabs>\n").contains(r"`<Tabs>`\{x\}`</Tabs>`"));
}

#[test]
fn test_bracket_around_code_span_validates_clean() {
    let mdx = convert("a < b `{x}` c > d\n");
    assert!(mdx.contains("a &lt; b `{x}` c > d"));
    assert!(validate_text(&mdx).is_empty());
}

#[test]
fn test_multiline_comment_fragments_dropped() {
    let mdx = convert("Intro text\n<!-- start of a\nlong comment -->\nOutro\n");
    assert!(!mdx.contains("<!--"));
    assert!(!mdx.contains("-->"));
    assert!(mdx.contains("Intro text\n"));
    assert!(mdx.contains("Outro\n"));
}

#[test]
fn test_unclosed_frontmatter_becomes_body() {
    let doc = converter().convert("---\ntitle: Never closed\nSome {text}\n", None);
    assert_eq!(doc.frontmatter.title, "Untitled");
    assert_eq!(doc.body[0], "---");
    assert_eq!(doc.body[2], r"Some \{text\}");
}

#[test]
fn test_long_title_is_truncated_for_sidebar() {
    let md = "---\ntitle: Spring Tips: Observability with Micrometer Tracing and Grafana Tempo\n---\n";
    let doc = converter().convert(md, None);
    assert_eq!(
        doc.frontmatter.sidebar_title,
        "Observability with Micrometer..."
    );
}

#[test]
fn test_petclinic_prefix_is_replaced() {
    let md = "---\ntitle: \"AI Meets Spring Petclinic: Adding Chat\"\n---\n";
    let doc = converter().convert(md, None);
    assert_eq!(doc.frontmatter.sidebar_title, "Petclinic: Adding Chat");
}

#[test]
fn test_description_skips_headings_and_html() {
    let md = "---\ntitle: T\n---\n# Heading that is long enough\n<p>html paragraph long enough</p>\n![image alt text that is long](x.png)\nshort\nThis is the first real paragraph of the post.\n";
    let doc = converter().convert(md, None);
    assert_eq!(
        doc.frontmatter.description.as_deref(),
        Some("This is the first real paragraph of the post.")
    );
}

#[test]
fn test_custom_prefixes_from_config() {
    let config = Config::from_toml(
        r#"
[convert]
default_title = "Draft"

[[convert.title_prefixes]]
pattern = "Release Notes:\\s*"
replacement = "Release: "
"#,
    )
    .unwrap();
    assert_eq!(
        config.convert.title_prefixes,
        vec![TitlePrefix::new("Release Notes:\\s*", "Release: ")]
    );

    let converter = MdxConverter::new(config.convert).unwrap();
    let doc = converter.convert("---\ntitle: Release Notes: 1.0 GA\n---\n", None);
    assert_eq!(doc.frontmatter.sidebar_title, "Release: 1.0 GA");
    assert_eq!(converter.convert("", None).frontmatter.title, "Draft");
}

#[test]
fn test_invalid_prefix_pattern_is_rejected() {
    let options = ConvertOptions {
        title_prefixes: vec![TitlePrefix::new("([unclosed", "")],
        ..ConvertOptions::default()
    };
    assert!(MdxConverter::new(options).is_err());
}

#[test]
fn test_convert_file() {
    let workspace = TestWorkspace::new();
    let path = workspace.create_file("posts/2024/11/hello.md", "---\ntitle: Hello\n---\nHi {there}\n");

    let doc = converter().convert_file(&path, Some("2024-11-01")).unwrap();
    assert_eq!(doc.frontmatter.date.as_deref(), Some("2024-11-01"));
    assert_eq!(doc.body, vec![r"Hi \{there\}".to_string()]);

    assert!(converter()
        .convert_file(&workspace.path("missing.md"), None)
        .is_err());
}
