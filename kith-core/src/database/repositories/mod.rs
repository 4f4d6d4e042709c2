//! Cypher-speaking implementations of the repository ports.

pub mod users;

pub use users::CypherUsersRepository;
