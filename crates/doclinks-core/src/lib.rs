//! doclinks core
//!
//! Typed, directional links attached to documents, the building blocks of
//! graph-augmented retrieval. This crate provides:
//! - [`Link`] values with `kind`, `direction` and `tag`
//! - [`get_links`] / [`add_links`] for the reserved `"links"` metadata key
//! - Link extractors for wikilinks, hashtags and path hierarchies
//!
//! Building edges from links is left to the graph store: an edge runs from a
//! document with an outgoing link to a document with an incoming link of the
//! same kind and tag.

pub mod document;
pub mod error;
pub mod extractors;
pub mod link;
pub mod links;

pub use document::{Document, Metadata, MetadataValue};
pub use error::{LinkError, LinkResult};
pub use extractors::{
    ExtractorRegistry, ExtractorRegistryBuilder, HashtagExtractor, HierarchyExtractor,
    LinkExtractor, WikilinkExtractor,
};
pub use link::{Link, LinkDirection};
pub use links::{add_links, get_links, LinkArg, METADATA_LINKS_KEY};
