//! Dynamically-typed values, result rows, parameterized statements, and the
//! executor seam the repositories run against.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Property map: node properties, or the loose field-mapping callers pass
/// when naming a relationship target.
pub type PropertyMap = BTreeMap<String, Value>;

/// A dynamically-typed graph value.
///
/// Untagged serde, so driver rows deserialize straight into it. Integers
/// are tried before floats so whole numbers keep their type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(PropertyMap),
}

impl Value {
    /// Get the value as a string slice, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the value as a property map, when it is one.
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::String)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// One result row, column name to value, matching the statement's `RETURN`
/// clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: PropertyMap,
}

impl Row {
    /// Build a row from its columns.
    pub fn new(columns: PropertyMap) -> Self {
        Self { columns }
    }

    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }

    /// Get a text column value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get a map column value by name.
    pub fn get_map(&self, name: &str) -> Option<&PropertyMap> {
        self.get(name).and_then(Value::as_map)
    }

    /// Consume the row, yielding its columns.
    pub fn into_columns(self) -> PropertyMap {
        self.columns
    }
}

/// A parameterized Cypher statement.
///
/// Caller data is always bound as parameters. Structural identifiers
/// (labels, relationship names) are spliced into the text only from the
/// fixed table in [`kith_model::RelationshipType`], never from caller
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    text: String,
    params: PropertyMap,
}

impl Statement {
    /// Statement with the given template text and no parameters yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: PropertyMap::new(),
        }
    }

    /// Bind a parameter.
    #[must_use]
    pub fn bind(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// The template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All bound parameters.
    pub fn params(&self) -> &PropertyMap {
        &self.params
    }

    /// A single bound parameter by name.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

/// Issues one statement against the graph store and returns its rows.
///
/// The executor is the injected store-client resource: implementations own
/// connection management, callers hold one executor for the life of the
/// process and share it freely across tasks. Each `run` is a single atomic
/// store request; this layer adds no retries, timeouts or transactions.
#[async_trait]
pub trait GraphExecutor: Send + Sync {
    /// Run a statement, suspending the caller until the store responds.
    async fn run(&self, statement: Statement) -> Result<Vec<Row>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_collects_params() {
        let statement = Statement::new("RETURN $a, $b")
            .bind("a", "one")
            .bind("b", 2i64);

        assert_eq!(statement.text(), "RETURN $a, $b");
        assert_eq!(statement.param("a"), Some(&Value::String("one".into())));
        assert_eq!(statement.param("b"), Some(&Value::Integer(2)));
        assert_eq!(statement.param("c"), None);
    }

    #[test]
    fn absent_optionals_bind_as_null() {
        let statement = Statement::new("SET user.email = $email")
            .bind("email", None::<String>);
        assert_eq!(statement.param("email"), Some(&Value::Null));
        assert!(statement.param("email").unwrap().is_null());
    }

    #[test]
    fn row_getters_are_typed() {
        let row = Row::new(PropertyMap::from([
            ("name".to_string(), Value::from("A")),
            ("age".to_string(), Value::from(30i64)),
        ]));

        assert_eq!(row.get_str("name"), Some("A"));
        assert_eq!(row.get_str("age"), None);
        assert_eq!(row.get("age"), Some(&Value::Integer(30)));
        assert_eq!(row.get_map("name"), None);
    }

    #[test]
    fn value_deserializes_untagged() {
        let value: Value = serde_json::from_str("null").unwrap();
        assert!(value.is_null());

        let value: Value = serde_json::from_str("42").unwrap();
        assert_eq!(value, Value::Integer(42));

        let value: Value = serde_json::from_str("4.5").unwrap();
        assert_eq!(value, Value::Float(4.5));

        let value: Value =
            serde_json::from_str(r#"{"place_id": "p1"}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("place_id"), Some(&Value::String("p1".into())));
    }
}
