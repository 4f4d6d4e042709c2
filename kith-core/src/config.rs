//! Store connection configuration.

use crate::error::{GraphError, Result};

const DEFAULT_URI: &str = "bolt://127.0.0.1:7687";
const DEFAULT_USER: &str = "neo4j";

/// Connection settings for the graph store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Bolt endpoint, e.g. `bolt://127.0.0.1:7687`.
    pub uri: String,
    /// Store user.
    pub user: String,
    /// Store password; empty when the store runs with auth disabled.
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
        }
    }
}

impl GraphConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PASSWORD`, after loading
    /// a `.env` file when one is present. Absent variables fall back to
    /// development defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            uri: env_or("NEO4J_URI", DEFAULT_URI)?,
            user: env_or("NEO4J_USER", DEFAULT_USER)?,
            password: env_or("NEO4J_PASSWORD", "")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(err) => Err(GraphError::Config(format!("{key}: {err}"))),
    }
}
