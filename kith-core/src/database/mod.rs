//! Store handle construction and the database facade.

pub mod executor;
pub mod neo4j;
pub mod ports;
pub mod repositories;

pub use executor::GraphExecutor;
pub use neo4j::Neo4jExecutor;
pub use repositories::CypherUsersRepository;

use std::fmt;
use std::sync::Arc;

use crate::config::GraphConfig;
use crate::error::Result;

/// Process-wide handle to the graph store.
///
/// Constructed explicitly once, then cloned freely; all clones share one
/// executor. Tests inject a substitute store through
/// [`GraphDatabase::with_executor`].
#[derive(Clone)]
pub struct GraphDatabase {
    executor: Arc<dyn GraphExecutor>,
    users: CypherUsersRepository,
}

impl fmt::Debug for GraphDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDatabase").finish_non_exhaustive()
    }
}

impl GraphDatabase {
    /// Connect to the store described by `config`.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let executor: Arc<dyn GraphExecutor> =
            Arc::new(Neo4jExecutor::connect(config).await?);
        Ok(Self::with_executor(executor))
    }

    /// Build the facade over an arbitrary executor.
    pub fn with_executor(executor: Arc<dyn GraphExecutor>) -> Self {
        let users = CypherUsersRepository::new(Arc::clone(&executor));
        Self { executor, users }
    }

    /// The user repository.
    pub fn users(&self) -> &CypherUsersRepository {
        &self.users
    }

    /// The raw executor, for callers that build their own statements.
    pub fn executor(&self) -> &dyn GraphExecutor {
        self.executor.as_ref()
    }
}
