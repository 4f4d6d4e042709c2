//! Graph data-access layer for the Kith social platform.
//!
//! Kith models its domain as a property graph: `:User` nodes keyed by
//! `facebookID`, `:Review` and `:Place` nodes maintained elsewhere, and
//! typed, directed edges between them (`FOLLOWS`, `WRITES`, `ISLOCAL`).
//! This crate owns the translation from repository calls to parameterized
//! Cypher statements and back into domain values.
//!
//! The layer is deliberately thin: each operation is a single atomic
//! request against the store, validation of required fields happens before
//! any query is issued, and all consistency guarantees are delegated to the
//! store itself. Structural identifiers (node labels, relationship names)
//! are only ever selected from the fixed table in
//! [`kith_model::RelationshipType`]; caller data travels exclusively as
//! bound parameters.
//!
//! Construction is explicit: build a [`GraphConfig`], connect a
//! [`GraphDatabase`], and hand it to whatever serving layer you run. Tests
//! substitute the store through [`GraphDatabase::with_executor`].

pub mod config;
pub mod database;
pub mod error;

pub use config::GraphConfig;
pub use database::executor::{
    GraphExecutor, PropertyMap, Row, Statement, Value,
};
pub use database::ports::UsersRepository;
pub use database::{CypherUsersRepository, GraphDatabase, Neo4jExecutor};
pub use error::{GraphError, Result};

pub use kith_model as model;
