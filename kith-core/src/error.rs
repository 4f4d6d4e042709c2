use kith_model::UnknownRelationshipType;
use thiserror::Error;

/// Failures surfaced by the graph data-access layer.
///
/// The taxonomy is deliberately small so callers can branch: bad input
/// (`MissingFields`, `UnrecognizedRelationship`) is detected before any
/// store interaction; `NotFound` means an entity or relationship endpoint
/// was absent where presence was required; `Store` carries the underlying
/// driver failure verbatim.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unrecognized relationship type: {0}")]
    UnrecognizedRelationship(String),

    #[error("{0}")]
    NotFound(String),

    #[error("graph store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GraphError {
    /// Check if this failure should be treated as invalid caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GraphError::MissingFields(_)
                | GraphError::UnrecognizedRelationship(_)
        )
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound(_))
    }
}

impl From<UnknownRelationshipType> for GraphError {
    fn from(err: UnknownRelationshipType) -> Self {
        GraphError::UnrecognizedRelationship(err.0)
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
