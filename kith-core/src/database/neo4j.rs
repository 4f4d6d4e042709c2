//! Neo4j-backed executor.

use std::fmt;

use async_trait::async_trait;
use neo4rs::{BoltNull, BoltType, Graph};
use tracing::{debug, info};

use crate::config::GraphConfig;
use crate::database::executor::{
    GraphExecutor, PropertyMap, Row, Statement, Value,
};
use crate::error::{GraphError, Result};

/// [`GraphExecutor`] backed by a Bolt connection to Neo4j.
#[derive(Clone)]
pub struct Neo4jExecutor {
    graph: Graph,
}

impl fmt::Debug for Neo4jExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jExecutor").finish_non_exhaustive()
    }
}

impl Neo4jExecutor {
    /// Connect to the store described by `config`.
    ///
    /// The driver pools connections internally; hold one executor per
    /// process and clone it where needed.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let graph =
            Graph::new(&config.uri, &config.user, &config.password)
                .await
                .map_err(|e| {
                    GraphError::Store(format!(
                        "failed to connect to graph store at {}: {e}",
                        config.uri
                    ))
                })?;

        info!(uri = %config.uri, "graph store connection initialized");
        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphExecutor for Neo4jExecutor {
    async fn run(&self, statement: Statement) -> Result<Vec<Row>> {
        debug!(query = statement.text(), "issuing graph query");

        let mut query = neo4rs::query(statement.text());
        for (key, value) in statement.params() {
            query = query.param(key.as_str(), bolt_param(value)?);
        }

        let mut stream =
            self.graph.execute(query).await.map_err(store_error)?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(store_error)? {
            rows.push(decode_row(&row)?);
        }
        Ok(rows)
    }
}

fn store_error(err: neo4rs::Error) -> GraphError {
    GraphError::Store(err.to_string())
}

fn decode_row(row: &neo4rs::Row) -> Result<Row> {
    let columns: PropertyMap = row.to().map_err(|e| {
        GraphError::Store(format!("failed to decode result row: {e}"))
    })?;
    Ok(Row::new(columns))
}

fn bolt_param(value: &Value) -> Result<BoltType> {
    match value {
        Value::Null => Ok(BoltType::Null(BoltNull)),
        Value::Bool(b) => Ok(BoltType::from(*b)),
        Value::Integer(i) => Ok(BoltType::from(*i)),
        Value::Float(f) => Ok(BoltType::from(*f)),
        Value::String(s) => Ok(BoltType::from(s.as_str())),
        // The repositories only ever bind scalar identifiers and profile
        // fields; structured parameters are a programming error here.
        Value::List(_) | Value::Map(_) => Err(GraphError::Store(
            "list and map values cannot be bound as query parameters".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_params_convert() {
        assert!(bolt_param(&Value::Null).is_ok());
        assert!(bolt_param(&Value::Bool(true)).is_ok());
        assert!(bolt_param(&Value::Integer(7)).is_ok());
        assert!(bolt_param(&Value::Float(0.5)).is_ok());
        assert!(bolt_param(&Value::from("p1")).is_ok());
    }

    #[test]
    fn structured_params_are_refused() {
        let err = bolt_param(&Value::List(vec![])).unwrap_err();
        assert!(matches!(err, GraphError::Store(_)));

        let err = bolt_param(&Value::Map(PropertyMap::new())).unwrap_err();
        assert!(matches!(err, GraphError::Store(_)));
    }
}
