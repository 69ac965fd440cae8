//! Extraction configuration components

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// Link extractor settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Which extractors run, and with which link kinds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractionConfig {
    /// `[[wikilink]]` extraction
    #[serde(default)]
    pub wikilinks: WikilinkConfig,
    /// `#hashtag` extraction
    #[serde(default)]
    pub hashtags: HashtagConfig,
    /// Path hierarchy extraction
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
}

impl ExtractionConfig {
    /// True when no extractor is enabled
    pub fn is_empty(&self) -> bool {
        !self.wikilinks.enabled && !self.hashtags.enabled && !self.hierarchy.enabled
    }
}

/// Wikilink extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WikilinkConfig {
    /// Run this extractor
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Link kind for emitted links
    #[serde(default = "default_wikilink_kind")]
    pub kind: String,
    /// Metadata key holding the document title (target of incoming links)
    #[serde(default = "default_title_key")]
    pub title_key: String,
}

impl Default for WikilinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: default_wikilink_kind(),
            title_key: default_title_key(),
        }
    }
}

/// Hashtag extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HashtagConfig {
    /// Run this extractor
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Link kind for emitted links
    #[serde(default = "default_hashtag_kind")]
    pub kind: String,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: default_hashtag_kind(),
        }
    }
}

/// Hierarchy extractor configuration
///
/// Disabled by default: it only makes sense when documents carry a path in
/// their metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HierarchyConfig {
    /// Run this extractor
    #[serde(default)]
    pub enabled: bool,
    /// Base link kind; directional kinds are derived as `{kind}:up` etc.
    #[serde(default = "default_hierarchy_kind")]
    pub kind: String,
    /// Metadata key holding the document's path
    #[serde(default = "default_path_key")]
    pub path_key: String,
    /// Path segment separator
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Link each document to its parent
    #[serde(default = "default_true")]
    pub up_links: bool,
    /// Link each parent to its children
    #[serde(default)]
    pub down_links: bool,
    /// Link documents sharing a parent
    #[serde(default)]
    pub sibling_links: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: default_hierarchy_kind(),
            path_key: default_path_key(),
            separator: default_separator(),
            up_links: true,
            down_links: false,
            sibling_links: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_wikilink_kind() -> String {
    "wikilink".to_string()
}

fn default_title_key() -> String {
    "title".to_string()
}

fn default_hashtag_kind() -> String {
    "hashtag".to_string()
}

fn default_hierarchy_kind() -> String {
    "hierarchy".to_string()
}

fn default_path_key() -> String {
    "path".to_string()
}

fn default_separator() -> String {
    "/".to_string()
}
