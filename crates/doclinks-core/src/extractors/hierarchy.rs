//! Path hierarchy extractor
//!
//! Reads a path such as `guides/setup/linux` from document metadata and links
//! the document to its place in the tree. Each relation gets its own kind
//! (`{kind}:up`, `{kind}:down`, `{kind}:sibling`) so that enabling one never
//! produces edges for another.

use super::{unique_in_order, LinkExtractor};
use crate::document::Document;
use crate::link::Link;
use doclinks_config::HierarchyConfig;

/// Hierarchy extractor
#[derive(Debug, Clone)]
pub struct HierarchyExtractor {
    kind: String,
    path_key: String,
    separator: String,
    up_links: bool,
    down_links: bool,
    sibling_links: bool,
}

impl HierarchyExtractor {
    /// Create an extractor that only links documents to their parent
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path_key: "path".to_string(),
            separator: "/".to_string(),
            up_links: true,
            down_links: false,
            sibling_links: false,
        }
    }

    /// Create a hierarchy extractor from configuration
    pub fn from_config(config: &HierarchyConfig) -> Self {
        Self {
            kind: config.kind.clone(),
            path_key: config.path_key.clone(),
            separator: config.separator.clone(),
            up_links: config.up_links,
            down_links: config.down_links,
            sibling_links: config.sibling_links,
        }
    }

    pub fn with_path_key(mut self, path_key: impl Into<String>) -> Self {
        self.path_key = path_key.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_up_links(mut self, enabled: bool) -> Self {
        self.up_links = enabled;
        self
    }

    pub fn with_down_links(mut self, enabled: bool) -> Self {
        self.down_links = enabled;
        self
    }

    pub fn with_sibling_links(mut self, enabled: bool) -> Self {
        self.sibling_links = enabled;
        self
    }

    fn relation_kind(&self, relation: &str) -> String {
        format!("{}:{}", self.kind, relation)
    }

    /// Split a path into its own tag and its parent's tag
    fn tags(&self, path: &str) -> Option<(String, Option<String>)> {
        // An empty separator would split between every character
        if self.separator.is_empty() {
            let path = path.trim();
            return (!path.is_empty()).then(|| (path.to_string(), None));
        }

        let segments: Vec<&str> = path
            .split(self.separator.as_str())
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        let (_, parent) = segments.split_last()?;
        let own = segments.join(self.separator.as_str());
        let parent = (!parent.is_empty()).then(|| parent.join(self.separator.as_str()));
        Some((own, parent))
    }
}

impl Default for HierarchyExtractor {
    fn default() -> Self {
        Self::new("hierarchy")
    }
}

impl LinkExtractor for HierarchyExtractor {
    fn name(&self) -> &'static str {
        "hierarchy"
    }

    fn can_handle(&self, document: &Document) -> bool {
        document.metadata_text(&self.path_key).is_some()
    }

    fn extract(&self, document: &Document) -> Vec<Link> {
        let Some((own, parent)) = document
            .metadata_text(&self.path_key)
            .and_then(|path| self.tags(path))
        else {
            return Vec::new();
        };

        let mut links = Vec::new();

        if self.up_links {
            let kind = self.relation_kind("up");
            links.push(Link::incoming(&kind, &own));
            if let Some(parent) = &parent {
                links.push(Link::outgoing(&kind, parent));
            }
        }

        if self.down_links {
            let kind = self.relation_kind("down");
            links.push(Link::outgoing(&kind, &own));
            if let Some(parent) = &parent {
                links.push(Link::incoming(&kind, parent));
            }
        }

        if self.sibling_links {
            if let Some(parent) = &parent {
                links.push(Link::bidir(self.relation_kind("sibling"), parent));
            }
        }

        unique_in_order(links)
    }

    fn priority(&self) -> u8 {
        40
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str) -> Document {
        Document::new("").with_metadata("path", path)
    }

    #[test]
    fn test_up_links_by_default() {
        let links = HierarchyExtractor::default().extract(&doc("guides/setup/linux"));

        assert_eq!(
            links,
            vec![
                Link::incoming("hierarchy:up", "guides/setup/linux"),
                Link::outgoing("hierarchy:up", "guides/setup"),
            ]
        );
    }

    #[test]
    fn test_child_and_parent_connect_upwards() {
        let extractor = HierarchyExtractor::default();
        let child = extractor.extract(&doc("guides/setup"));
        let parent = extractor.extract(&doc("guides"));

        // The child's outgoing tag is the parent's incoming tag
        assert!(child.contains(&Link::outgoing("hierarchy:up", "guides")));
        assert!(parent.contains(&Link::incoming("hierarchy:up", "guides")));
    }

    #[test]
    fn test_all_relations() {
        let extractor = HierarchyExtractor::new("tree")
            .with_down_links(true)
            .with_sibling_links(true);

        assert_eq!(
            extractor.extract(&doc("a/b")),
            vec![
                Link::incoming("tree:up", "a/b"),
                Link::outgoing("tree:up", "a"),
                Link::outgoing("tree:down", "a/b"),
                Link::incoming("tree:down", "a"),
                Link::bidir("tree:sibling", "a"),
            ]
        );
    }

    #[test]
    fn test_root_has_no_parent_links() {
        let extractor = HierarchyExtractor::default()
            .with_down_links(true)
            .with_sibling_links(true);

        assert_eq!(
            extractor.extract(&doc("root")),
            vec![
                Link::incoming("hierarchy:up", "root"),
                Link::outgoing("hierarchy:down", "root"),
            ]
        );
    }

    #[test]
    fn test_path_is_normalized() {
        let links = HierarchyExtractor::default()
            .with_up_links(true)
            .extract(&doc("/docs//api/ "));

        assert_eq!(
            links,
            vec![
                Link::incoming("hierarchy:up", "docs/api"),
                Link::outgoing("hierarchy:up", "docs"),
            ]
        );
    }

    #[test]
    fn test_custom_key_and_separator() {
        let document = Document::new("").with_metadata("module", "crate::links::get");
        let links = HierarchyExtractor::default()
            .with_path_key("module")
            .with_separator("::")
            .extract(&document);

        assert_eq!(links[1], Link::outgoing("hierarchy:up", "crate::links"));
    }

    #[test]
    fn test_missing_or_empty_path() {
        let extractor = HierarchyExtractor::default();

        assert!(!extractor.can_handle(&Document::new("no path")));
        assert!(extractor.extract(&Document::new("no path")).is_empty());
        assert!(extractor.extract(&doc(" / ")).is_empty());
    }
}
