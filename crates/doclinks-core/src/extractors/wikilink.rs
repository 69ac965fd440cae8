//! Wikilink extractor
//!
//! Turns Obsidian-style wikilinks in a document's content into outgoing links:
//! - Basic wikilinks: `[[note]]`
//! - Wikilinks with aliases: `[[note|alias]]`
//! - Wikilinks with headings: `[[note#heading]]`
//! - Wikilinks with block references: `[[note#^block-id]]`
//! - Embeds: `![[note]]`
//!
//! A document with a title also gets an incoming link on that title, so the
//! outgoing links of other documents have something to match.

use super::{unique_in_order, CodeSpans, LinkExtractor};
use crate::document::Document;
use crate::link::Link;
use doclinks_config::WikilinkConfig;
use regex::Regex;
use std::sync::LazyLock;

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\]]+)\]\]").expect("wikilink regex"));

/// Wikilink extractor
#[derive(Debug, Clone)]
pub struct WikilinkExtractor {
    kind: String,
    title_key: String,
}

impl WikilinkExtractor {
    /// Create a wikilink extractor emitting links of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title_key: "title".to_string(),
        }
    }

    /// Create a wikilink extractor from configuration
    pub fn from_config(config: &WikilinkConfig) -> Self {
        Self::new(config.kind.clone()).with_title_key(config.title_key.clone())
    }

    /// Read the document title from a different metadata key
    pub fn with_title_key(mut self, title_key: impl Into<String>) -> Self {
        self.title_key = title_key.into();
        self
    }

    /// Strip alias and heading/block reference from the inner text
    fn target(inner: &str) -> &str {
        let target = inner.split('|').next().unwrap_or(inner);
        target.split('#').next().unwrap_or(target).trim()
    }
}

impl Default for WikilinkExtractor {
    fn default() -> Self {
        Self::new("wikilink")
    }
}

impl LinkExtractor for WikilinkExtractor {
    fn name(&self) -> &'static str {
        "wikilinks"
    }

    fn can_handle(&self, document: &Document) -> bool {
        // Quick check for wikilink pattern before expensive regex
        document.page_content.contains("[[") || document.metadata_text(&self.title_key).is_some()
    }

    fn extract(&self, document: &Document) -> Vec<Link> {
        let content = &document.page_content;
        let code_spans = CodeSpans::new(content);

        let title = document
            .metadata_text(&self.title_key)
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(|title| Link::incoming(&self.kind, title));

        let targets = WIKILINK_REGEX
            .captures_iter(content)
            .filter_map(|cap| {
                let full_match = cap.get(0)?;
                // Skip wikilinks inside code blocks
                if code_spans.contains(full_match.start()) {
                    return None;
                }
                let target = Self::target(cap.get(2)?.as_str());
                (!target.is_empty()).then(|| Link::outgoing(&self.kind, target))
            });

        unique_in_order(title.into_iter().chain(targets))
    }

    fn priority(&self) -> u8 {
        80
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<Link> {
        WikilinkExtractor::default().extract(&Document::new(content))
    }

    #[test]
    fn test_wikilink_detection() {
        let extractor = WikilinkExtractor::default();

        assert!(extractor.can_handle(&Document::new("This has a [[wikilink]] reference")));
        assert!(extractor.can_handle(&Document::new("Embed: ![[note]]")));
        assert!(!extractor.can_handle(&Document::new("Markdown link [text](url)")));
        assert!(extractor.can_handle(&Document::new("plain").with_metadata("title", "Plain")));
    }

    #[test]
    fn test_basic_wikilink() {
        assert_eq!(
            extract("See [[Other Note]] for details."),
            vec![Link::outgoing("wikilink", "Other Note")]
        );
    }

    #[test]
    fn test_alias_heading_block_and_embed() {
        let links = extract("[[Note|Display]] [[Guide#Setup]] [[Log#^abc123]] ![[diagram.png]]");

        assert_eq!(
            links,
            vec![
                Link::outgoing("wikilink", "Note"),
                Link::outgoing("wikilink", "Guide"),
                Link::outgoing("wikilink", "Log"),
                Link::outgoing("wikilink", "diagram.png"),
            ]
        );
    }

    #[test]
    fn test_wikilink_in_code_block_skipped() {
        let content = r#"Regular link: [[normal]]

```
Code block link: [[should-not-parse]]
```

Inline `[[also-skipped]]` and after code: [[after]]"#;

        assert_eq!(
            extract(content),
            vec![
                Link::outgoing("wikilink", "normal"),
                Link::outgoing("wikilink", "after"),
            ]
        );
    }

    #[test]
    fn test_wikilink_in_indented_code_skipped() {
        assert_eq!(
            extract("[[kept]]\n\n    [[indented]] in code\n"),
            vec![Link::outgoing("wikilink", "kept")]
        );
    }

    #[test]
    fn test_duplicates_and_empty_targets() {
        assert_eq!(
            extract("[[a]] [[ a ]] [[#heading-only]] [[a|again]]"),
            vec![Link::outgoing("wikilink", "a")]
        );
    }

    #[test]
    fn test_title_becomes_incoming_link() {
        let doc = Document::new("Links to [[Other]]").with_metadata("title", "Home");
        let links = WikilinkExtractor::new("note").extract(&doc);

        assert_eq!(
            links,
            vec![Link::incoming("note", "Home"), Link::outgoing("note", "Other")]
        );
    }

    #[test]
    fn test_custom_title_key() {
        let doc = Document::new("").with_metadata("name", "Index");
        let links = WikilinkExtractor::default().with_title_key("name").extract(&doc);

        assert_eq!(links, vec![Link::incoming("wikilink", "Index")]);
    }
}
