//! Documents and their metadata

use crate::link::Link;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document metadata, keyed by name
pub type Metadata = BTreeMap<String, MetadataValue>;

/// Strongly-typed metadata values with tagged serialization
///
/// Each variant serializes as `{"type": "...", "value": ...}`:
/// ```json
/// {"type": "text", "value": "Getting Started"}
/// {"type": "links", "value": [{"kind": "url", "direction": "in", "tag": "a.html"}]}
/// ```
///
/// `Links` is the canonical shape of the reserved `"links"` key. A `List`
/// holding only `Link` values is accepted there too and converted on first
/// access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Link(Link),
    Links(Vec<Link>),
    List(Vec<MetadataValue>),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Short name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::Null => "null",
            MetadataValue::Bool(_) => "bool",
            MetadataValue::Number(_) => "number",
            MetadataValue::Text(_) => "text",
            MetadataValue::Link(_) => "link",
            MetadataValue::Links(_) => "links",
            MetadataValue::List(_) => "list",
            MetadataValue::Map(_) => "map",
        }
    }

    /// Borrow the value as a string, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<Link> for MetadataValue {
    fn from(value: Link) -> Self {
        MetadataValue::Link(value)
    }
}

impl From<Vec<Link>> for MetadataValue {
    fn from(value: Vec<Link>) -> Self {
        MetadataValue::Links(value)
    }
}

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(value: Vec<MetadataValue>) -> Self {
        MetadataValue::List(value)
    }
}

/// A piece of content with attached metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<String>,
    pub page_content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            id: None,
            page_content: page_content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Set the document ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a metadata entry, replacing any previous value
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Read a metadata entry as text
    pub fn metadata_text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetadataValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("Some content");

        assert_eq!(doc.page_content, "Some content");
        assert!(doc.id.is_none());
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_document_builders() {
        let doc = Document::new("body")
            .with_id("doc-1")
            .with_metadata("title", "Getting Started")
            .with_metadata("draft", true);

        assert_eq!(doc.id.as_deref(), Some("doc-1"));
        assert_eq!(doc.metadata_text("title"), Some("Getting Started"));
        assert_eq!(doc.metadata_text("draft"), None);
        assert_eq!(doc.metadata.get("draft"), Some(&MetadataValue::Bool(true)));
    }

    #[test]
    fn test_metadata_value_tagged_serialization() {
        let value = MetadataValue::Text("hello".to_string());
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "value": "hello"}));

        let links = MetadataValue::Links(vec![Link::incoming("url", "a.html")]);
        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "links",
                "value": [{"kind": "url", "direction": "in", "tag": "a.html"}]
            })
        );
    }

    #[test]
    fn test_document_serialization() {
        let doc = Document::new("content")
            .with_id("doc-2")
            .with_metadata("links", vec![Link::bidir("hashtag", "rust")]);

        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, doc);
    }

    #[test]
    fn test_document_deserialization_without_metadata() {
        let doc: Document = serde_json::from_str(r#"{"id": null, "page_content": "x"}"#).unwrap();
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(MetadataValue::Null.type_name(), "null");
        assert_eq!(MetadataValue::from(1.5).type_name(), "number");
        assert_eq!(MetadataValue::from(Link::outgoing("k", "t")).type_name(), "link");
        assert_eq!(MetadataValue::List(Vec::new()).type_name(), "list");
        assert_eq!(MetadataValue::Map(BTreeMap::new()).type_name(), "map");
    }
}
