//! Hashtag extractor
//!
//! Every `#tag` in the content becomes a bidirectional link, so documents
//! sharing a tag are connected both ways. Nested tags (`#project/alpha`) keep
//! their full path as the link tag.

use super::{unique_in_order, CodeSpans, LinkExtractor};
use crate::document::Document;
use crate::link::Link;
use doclinks_config::HashtagConfig;
use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([\p{L}\p{N}_/-]+)").expect("hashtag regex"));

/// Hashtag extractor
#[derive(Debug, Clone)]
pub struct HashtagExtractor {
    kind: String,
}

impl HashtagExtractor {
    /// Create a hashtag extractor emitting links of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Create a hashtag extractor from configuration
    pub fn from_config(config: &HashtagConfig) -> Self {
        Self::new(config.kind.clone())
    }

    fn tags_in<'a>(content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let code_spans = CodeSpans::new(content);

        HASHTAG_REGEX.captures_iter(content).filter_map(move |cap| {
            let start = cap.get(0)?.start();
            if code_spans.contains(start) {
                return None;
            }

            // Skip if preceded by a word character (`issue#12`)
            let before = &content[..start];
            if before.chars().last().is_some_and(|c| c.is_alphanumeric()) {
                return None;
            }

            // Skip URL fragments and link destinations (`[text](#anchor)`)
            let word = before.rsplit(char::is_whitespace).next().unwrap_or(before);
            if word.contains("://") || word.contains("](") {
                return None;
            }

            let tag = cap.get(1)?.as_str().trim_end_matches(['/', '-']);
            (!tag.is_empty()).then_some(tag)
        })
    }
}

impl Default for HashtagExtractor {
    fn default() -> Self {
        Self::new("hashtag")
    }
}

impl LinkExtractor for HashtagExtractor {
    fn name(&self) -> &'static str {
        "hashtags"
    }

    fn can_handle(&self, document: &Document) -> bool {
        document.page_content.contains('#')
    }

    fn extract(&self, document: &Document) -> Vec<Link> {
        let links =
            Self::tags_in(&document.page_content).map(|tag| Link::bidir(&self.kind, tag));

        unique_in_order(links)
    }

    fn priority(&self) -> u8 {
        60
    }
}
