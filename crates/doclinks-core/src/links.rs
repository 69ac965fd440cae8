//! Reading and writing links in document metadata
//!
//! Links live under the reserved [`METADATA_LINKS_KEY`] as a
//! [`MetadataValue::Links`] sequence. [`get_links`] creates that entry on
//! first access and hands back the stored sequence itself, so anything pushed
//! through the returned handle is visible in the document.

use crate::document::{Document, MetadataValue};
use crate::error::{LinkError, LinkResult};
use crate::link::Link;
use tracing::debug;

/// Metadata key reserved for a document's links
pub const METADATA_LINKS_KEY: &str = "links";

/// One argument to [`add_links`]: a single link or a group of links
///
/// Groups are flattened one level when added; a single link is always added
/// as one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkArg {
    One(Link),
    Many(Vec<Link>),
}

impl LinkArg {
    fn append_to(self, links: &mut Vec<Link>) {
        match self {
            LinkArg::One(link) => links.push(link),
            LinkArg::Many(group) => links.extend(group),
        }
    }
}

impl From<Link> for LinkArg {
    fn from(link: Link) -> Self {
        LinkArg::One(link)
    }
}

impl From<Vec<Link>> for LinkArg {
    fn from(links: Vec<Link>) -> Self {
        LinkArg::Many(links)
    }
}

impl From<&[Link]> for LinkArg {
    fn from(links: &[Link]) -> Self {
        LinkArg::Many(links.to_vec())
    }
}

impl<const N: usize> From<[Link; N]> for LinkArg {
    fn from(links: [Link; N]) -> Self {
        LinkArg::Many(links.into())
    }
}

/// Get the links stored on a document
///
/// If the document has no `"links"` entry, an empty one is inserted. If the
/// entry is a [`MetadataValue::List`] of links, it is converted in place to
/// the canonical [`MetadataValue::Links`] form, keeping order.
///
/// The returned reference points at the stored sequence, not a copy.
///
/// # Errors
///
/// [`LinkError::TypeMismatch`] if the entry holds anything that is not a
/// sequence of links. The entry is left as it was.
pub fn get_links(doc: &mut Document) -> LinkResult<&mut Vec<Link>> {
    let slot = doc
        .metadata
        .entry(METADATA_LINKS_KEY.to_string())
        .or_insert_with(|| MetadataValue::Links(Vec::new()));

    if !matches!(slot, MetadataValue::Links(_)) {
        let coerced = coerce_links(slot)?;
        debug!(
            from = slot.type_name(),
            count = coerced.len(),
            "Converted document links metadata to a link sequence"
        );
        *slot = MetadataValue::Links(coerced);
    }

    match slot {
        MetadataValue::Links(links) => Ok(links),
        other => Err(LinkError::type_mismatch(METADATA_LINKS_KEY, other.type_name())),
    }
}

/// Add links to a document
///
/// Arguments are processed left to right. Each [`LinkArg::One`] is appended
/// as is; each [`LinkArg::Many`] has its links appended in order. Existing
/// links are kept and nothing is deduplicated.
///
/// ```rust
/// use doclinks_core::{add_links, get_links, Document, Link, LinkArg};
///
/// let mut doc = Document::new("content");
/// let (a, b, c) = (Link::outgoing("k", "a"), Link::outgoing("k", "b"), Link::incoming("k", "c"));
///
/// add_links(&mut doc, [LinkArg::from(a.clone()), vec![b.clone(), c.clone()].into()]).unwrap();
/// assert_eq!(*get_links(&mut doc).unwrap(), vec![a, b, c]);
/// ```
///
/// # Errors
///
/// [`LinkError::TypeMismatch`] if the document's `"links"` entry cannot be
/// read as a link sequence (see [`get_links`]).
pub fn add_links<I>(doc: &mut Document, links: I) -> LinkResult<()>
where
    I: IntoIterator,
    I::Item: Into<LinkArg>,
{
    let links_in_metadata = get_links(doc)?;
    for link in links {
        let arg: LinkArg = link.into();
        arg.append_to(links_in_metadata);
    }
    Ok(())
}

impl Document {
    /// Add links while building a document
    pub fn with_links<I>(mut self, links: I) -> LinkResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<LinkArg>,
    {
        add_links(&mut self, links)?;
        Ok(self)
    }
}

fn coerce_links(value: &MetadataValue) -> LinkResult<Vec<Link>> {
    match value {
        MetadataValue::Links(links) => Ok(links.clone()),
        MetadataValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                MetadataValue::Link(link) => Ok(link.clone()),
                other => Err(LinkError::type_mismatch(
                    METADATA_LINKS_KEY,
                    format!("a list with {} at index {}", other.type_name(), index),
                )),
            })
            .collect(),
        other => Err(LinkError::type_mismatch(METADATA_LINKS_KEY, other.type_name())),
    }
}
