//! Core data model definitions shared across Kith crates.

pub mod relationship;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use relationship::{
    RelationshipTarget, RelationshipType, UnknownRelationshipType,
};
pub use user::{CreateUserRequest, User};
