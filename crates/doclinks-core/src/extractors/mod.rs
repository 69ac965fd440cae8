//! Link extractors.
//!
//! This module defines the `LinkExtractor` trait and `ExtractorRegistry`
//! for deriving links from document content and metadata.

mod hashtag;
mod hierarchy;
mod registry;
mod wikilink;

pub use hashtag::HashtagExtractor;
pub use hierarchy::HierarchyExtractor;
pub use registry::{ExtractorRegistry, ExtractorRegistryBuilder};
pub use wikilink::WikilinkExtractor;

use crate::document::Document;
use crate::link::Link;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

static CODE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^```[\s\S]*?^```|^    .*$|`[^`]+`").expect("code block regex")
});

/// Trait for link extractors.
///
/// - `can_handle()` for fast detection
/// - `priority()` for ordering
/// - `extract()` for the actual work
pub trait LinkExtractor: Send + Sync {
    /// Unique name for this extractor
    fn name(&self) -> &'static str;

    /// Fast check if this extractor might find links in the document.
    ///
    /// Should be cheap. If false, `extract()` is skipped.
    fn can_handle(&self, _document: &Document) -> bool {
        true
    }

    /// Extract links from the document.
    ///
    /// Returns links in first-seen order, each at most once.
    fn extract(&self, document: &Document) -> Vec<Link>;

    /// Priority (higher = runs first). Default: 50
    fn priority(&self) -> u8 {
        50
    }
}

/// Drop repeated links, keeping the first occurrence of each
pub(crate) fn unique_in_order(links: impl IntoIterator<Item = Link>) -> Vec<Link> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

/// Byte ranges of fenced blocks, indented blocks and inline code in a text
///
/// Extractors share this so a piece of content is either code for all of
/// them or for none.
pub(crate) struct CodeSpans(Vec<Range<usize>>);

impl CodeSpans {
    pub(crate) fn new(content: &str) -> Self {
        Self(CODE_BLOCK_REGEX.find_iter(content).map(|m| m.range()).collect())
    }

    /// Whether the byte offset falls inside code
    pub(crate) fn contains(&self, offset: usize) -> bool {
        self.0.iter().any(|span| span.contains(&offset))
    }
}
