//! Registry of link extractors (sorted by priority descending).

use super::{HashtagExtractor, HierarchyExtractor, LinkExtractor, WikilinkExtractor};
use crate::document::Document;
use crate::error::LinkResult;
use crate::link::Link;
use crate::links::add_links;
use doclinks_config::ExtractionConfig;
use std::sync::Arc;
use tracing::{debug, trace};

/// Registry of link extractors.
///
/// Every extractor whose `can_handle()` returns true contributes, in priority
/// order. Extractors with equal priority keep registration order.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn LinkExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Build a registry with the extractors enabled in `config`
    pub fn from_config(config: &ExtractionConfig) -> Self {
        if config.is_empty() {
            debug!("No link extractors enabled");
        }

        let mut builder = ExtractorRegistryBuilder::new();
        if config.wikilinks.enabled {
            builder = builder.with_extractor(WikilinkExtractor::from_config(&config.wikilinks));
        }
        if config.hashtags.enabled {
            builder = builder.with_extractor(HashtagExtractor::from_config(&config.hashtags));
        }
        if config.hierarchy.enabled {
            builder = builder.with_extractor(HierarchyExtractor::from_config(&config.hierarchy));
        }
        builder.build()
    }

    /// Register an extractor (re-sorts by priority)
    pub fn register(&mut self, extractor: Arc<dyn LinkExtractor>) {
        self.extractors.push(extractor);
        // Stable sort keeps registration order within a priority
        self.extractors
            .sort_by_key(|e| std::cmp::Reverse(e.priority()));
    }

    /// Get list of registered extractor names
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Run all applicable extractors over a document
    pub fn extract(&self, document: &Document) -> Vec<Link> {
        let mut links = Vec::new();
        for extractor in &self.extractors {
            if !extractor.can_handle(document) {
                continue;
            }
            let found = extractor.extract(document);
            trace!(
                extractor = extractor.name(),
                count = found.len(),
                "Extracted links"
            );
            links.extend(found);
        }
        links
    }

    /// Extract links and append them to the document's stored links
    ///
    /// Returns the number of links added.
    pub fn apply(&self, document: &mut Document) -> LinkResult<usize> {
        let links = self.extract(document);
        let count = links.len();
        add_links(document, [links])?;
        debug!(
            document = document.id.as_deref().unwrap_or("<unnamed>"),
            count, "Added extracted links"
        );
        Ok(count)
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &self.extractor_names())
            .finish()
    }
}

/// Builder for ergonomic registry construction
pub struct ExtractorRegistryBuilder {
    extractors: Vec<Arc<dyn LinkExtractor>>,
}

impl Default for ExtractorRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistryBuilder {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Add an extractor to the registry
    pub fn with_extractor(mut self, extractor: impl LinkExtractor + 'static) -> Self {
        self.extractors.push(Arc::new(extractor));
        self
    }

    /// Build the registry
    pub fn build(self) -> ExtractorRegistry {
        let mut registry = ExtractorRegistry::new();
        for extractor in self.extractors {
            registry.register(extractor);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::get_links;

    struct MockExtractor {
        name: &'static str,
        priority: u8,
        handles: bool,
    }

    impl LinkExtractor for MockExtractor {
        fn name(&self) -> &'static str {
            self.name
        }

        fn can_handle(&self, _document: &Document) -> bool {
            self.handles
        }

        fn extract(&self, _document: &Document) -> Vec<Link> {
            vec![Link::bidir("mock", self.name)]
        }

        fn priority(&self) -> u8 {
            self.priority
        }
    }

    fn mock(name: &'static str, priority: u8) -> MockExtractor {
        MockExtractor {
            name,
            priority,
            handles: true,
        }
    }

    #[test]
    fn test_registry_priority_order() {
        let registry = ExtractorRegistryBuilder::new()
            .with_extractor(mock("low", 10))
            .with_extractor(mock("high", 90))
            .with_extractor(mock("medium", 50))
            .with_extractor(mock("medium-2", 50))
            .build();

        assert_eq!(
            registry.extractor_names(),
            vec!["high", "medium", "medium-2", "low"]
        );
    }

    #[test]
    fn test_extract_skips_unhandled() {
        let registry = ExtractorRegistryBuilder::new()
            .with_extractor(mock("yes", 50))
            .with_extractor(MockExtractor {
                name: "no",
                priority: 60,
                handles: false,
            })
            .build();

        assert_eq!(
            registry.extract(&Document::new("x")),
            vec![Link::bidir("mock", "yes")]
        );
    }

    #[test]
    fn test_apply_appends_after_existing_links() {
        let registry = ExtractorRegistryBuilder::new()
            .with_extractor(mock("a", 50))
            .build();
        let mut doc = Document::new("x")
            .with_links([Link::outgoing("manual", "first")])
            .unwrap();

        let added = registry.apply(&mut doc).unwrap();

        assert_eq!(added, 1);
        assert_eq!(
            *get_links(&mut doc).unwrap(),
            vec![Link::outgoing("manual", "first"), Link::bidir("mock", "a")]
        );
    }

    #[test]
    fn test_apply_with_nothing_found_creates_entry() {
        let registry = ExtractorRegistry::new();
        let mut doc = Document::new("x");

        assert_eq!(registry.apply(&mut doc).unwrap(), 0);
        assert!(get_links(&mut doc).unwrap().is_empty());
    }

    #[test]
    fn test_from_default_config() {
        let registry = ExtractorRegistry::from_config(&ExtractionConfig::default());
        assert_eq!(registry.extractor_names(), vec!["wikilinks", "hashtags"]);
    }

    #[test]
    fn test_from_config_all_disabled() {
        let mut config = ExtractionConfig::default();
        config.wikilinks.enabled = false;
        config.hashtags.enabled = false;

        assert!(ExtractorRegistry::from_config(&config).is_empty());
    }
}
