//! Relationship typing: the fixed table of edge kinds the data layer can
//! build queries for.

use std::fmt::{self, Display};
use std::str::FromStr;

/// The kinds of directed edges a user can have in the graph.
///
/// Each kind resolves, totally, to the label and identifier property of the
/// node on the far side of the edge. The textual tags (`FOLLOWS`, `WRITES`,
/// `ISLOCAL`) are the relationship names used in the store and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationshipType {
    /// User follows another user.
    #[cfg_attr(feature = "serde", serde(rename = "FOLLOWS"))]
    Follows,
    /// User wrote a review.
    #[cfg_attr(feature = "serde", serde(rename = "WRITES"))]
    Writes,
    /// User is a local of a place.
    #[cfg_attr(feature = "serde", serde(rename = "ISLOCAL"))]
    IsLocal,
}

/// Node label and identifier property on the target side of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipTarget {
    /// Label of the node the edge points at.
    pub label: &'static str,
    /// Property uniquely identifying nodes carrying that label.
    pub id_field: &'static str,
}

impl RelationshipType {
    /// Every recognized edge kind.
    pub const ALL: [RelationshipType; 3] =
        [Self::Follows, Self::Writes, Self::IsLocal];

    /// The relationship name as it appears in the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Follows => "FOLLOWS",
            Self::Writes => "WRITES",
            Self::IsLocal => "ISLOCAL",
        }
    }

    /// Target metadata for this edge kind.
    pub const fn target(self) -> RelationshipTarget {
        match self {
            Self::Follows => RelationshipTarget {
                label: "User",
                id_field: "facebookID",
            },
            Self::Writes => RelationshipTarget {
                label: "Review",
                id_field: "reviewID",
            },
            Self::IsLocal => RelationshipTarget {
                label: "Place",
                id_field: "place_id",
            },
        }
    }
}

impl Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = UnknownRelationshipType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "FOLLOWS" => Ok(Self::Follows),
            "WRITES" => Ok(Self::Writes),
            "ISLOCAL" => Ok(Self::IsLocal),
            other => Err(UnknownRelationshipType(other.to_string())),
        }
    }
}

/// A textual tag outside the relationship table.
///
/// Rejecting unknown tags at the parse boundary keeps the query builders
/// total: no statement is ever assembled from unresolved metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRelationshipType(pub String);

impl Display for UnknownRelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown relationship type: {}", self.0)
    }
}

impl std::error::Error for UnknownRelationshipType {}
