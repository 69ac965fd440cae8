//! Typed, directional document links
//!
//! A [`Link`] is one endpoint of a potential graph edge. Edges exist from
//! documents carrying an outgoing link to documents carrying an incoming link
//! with the same `kind` and `tag`; bidirectional links count as both. This
//! module only defines the vocabulary, it never matches links itself.

use crate::error::{LinkError, LinkResult};
use serde::{Deserialize, Serialize};

/// Polarity of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    /// Other documents may point at this one
    In,
    /// This document points at others
    Out,
    /// Both incoming and outgoing
    Bidir,
}

impl LinkDirection {
    /// All directions, in declaration order
    pub const ALL: [LinkDirection; 3] =
        [LinkDirection::In, LinkDirection::Out, LinkDirection::Bidir];

    /// The wire literal for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkDirection::In => "in",
            LinkDirection::Out => "out",
            LinkDirection::Bidir => "bidir",
        }
    }

    /// Whether a link with this direction can be the source of an edge
    pub fn is_outgoing(&self) -> bool {
        matches!(self, LinkDirection::Out | LinkDirection::Bidir)
    }

    /// Whether a link with this direction can be the target of an edge
    pub fn is_incoming(&self) -> bool {
        matches!(self, LinkDirection::In | LinkDirection::Bidir)
    }
}

impl std::fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LinkDirection {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" => Ok(LinkDirection::In),
            "out" => Ok(LinkDirection::Out),
            "bidir" => Ok(LinkDirection::Bidir),
            _ => Err(LinkError::invalid_direction(s)),
        }
    }
}

/// A link to or from a tag of a given kind
///
/// Links are immutable values: the fields are only readable, and equality and
/// hashing cover all three of them, so links can be used directly in sets and
/// as map keys.
///
/// # Example
///
/// ```rust
/// use doclinks_core::{Link, LinkDirection};
///
/// let link = Link::outgoing("url", "https://example.com");
/// assert_eq!(link, Link::new("url", LinkDirection::Out, "https://example.com"));
/// assert_ne!(link, Link::incoming("url", "https://example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    kind: String,
    direction: LinkDirection,
    tag: String,
}

impl Link {
    /// Create a link with an explicit direction
    pub fn new(kind: impl Into<String>, direction: LinkDirection, tag: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            direction,
            tag: tag.into(),
        }
    }

    /// Create a link from a direction literal (`"in"`, `"out"` or `"bidir"`)
    pub fn try_new(
        kind: impl Into<String>,
        direction: &str,
        tag: impl Into<String>,
    ) -> LinkResult<Self> {
        let direction = direction.parse()?;
        Ok(Self::new(kind, direction, tag))
    }

    /// Create an incoming link
    pub fn incoming(kind: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(kind, LinkDirection::In, tag)
    }

    /// Create an outgoing link
    pub fn outgoing(kind: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(kind, LinkDirection::Out, tag)
    }

    /// Create a bidirectional link
    pub fn bidir(kind: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(kind, LinkDirection::Bidir, tag)
    }

    /// The namespace of this link's tag
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The direction of this link
    pub fn direction(&self) -> LinkDirection {
        self.direction
    }

    /// The matching key within `kind`
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.direction, self.tag)
    }
}
