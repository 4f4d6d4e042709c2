use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use kith_model::{CreateUserRequest, RelationshipType, User};
use tracing::{debug, info};

use crate::database::executor::{
    GraphExecutor, PropertyMap, Row, Statement, Value,
};
use crate::database::ports::users::UsersRepository;
use crate::error::{GraphError, Result};

/// Projection shared by every statement that returns the user; keeps row
/// decoding flat instead of shipping whole nodes back.
const USER_PROJECTION: &str = "user.facebookID AS facebookID, \
     user.name AS name, user.email AS email, \
     user.facebookToken AS facebookToken";

/// [`UsersRepository`] that issues parameterized Cypher through a
/// [`GraphExecutor`].
#[derive(Clone)]
pub struct CypherUsersRepository {
    executor: Arc<dyn GraphExecutor>,
}

impl fmt::Debug for CypherUsersRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CypherUsersRepository").finish_non_exhaustive()
    }
}

impl CypherUsersRepository {
    pub fn new(executor: Arc<dyn GraphExecutor>) -> Self {
        Self { executor }
    }

    fn executor(&self) -> &dyn GraphExecutor {
        self.executor.as_ref()
    }
}

fn user_from_row(row: &Row) -> Result<User> {
    let facebook_id = row
        .get_str("facebookID")
        .ok_or_else(|| {
            GraphError::Store("user row missing facebookID".into())
        })?
        .to_string();
    let name = row
        .get_str("name")
        .ok_or_else(|| GraphError::Store("user row missing name".into()))?
        .to_string();

    Ok(User {
        facebook_id,
        name,
        email: row.get_str("email").map(str::to_string),
        facebook_token: row.get_str("facebookToken").map(str::to_string),
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[async_trait]
impl UsersRepository for CypherUsersRepository {
    async fn create_unique_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<User> {
        let mut missing = Vec::new();
        if non_empty(&request.facebook_id).is_none() {
            missing.push("facebookID");
        }
        if non_empty(&request.name).is_none() {
            missing.push("name");
        }
        if !missing.is_empty() {
            return Err(GraphError::MissingFields(missing));
        }

        let statement = Statement::new(format!(
            "MERGE (user:User {{facebookID: $facebookID}})\n\
             SET user.name = $name, user.email = $email, \
             user.facebookToken = $facebookToken\n\
             RETURN {USER_PROJECTION}"
        ))
        .bind("facebookID", non_empty(&request.facebook_id).unwrap_or(""))
        .bind("name", non_empty(&request.name).unwrap_or(""))
        .bind("email", request.email.clone())
        .bind("facebookToken", request.facebook_token.clone());

        let rows = self.executor().run(statement).await?;
        let row = rows.first().ok_or_else(|| {
            GraphError::Store("user merge returned no rows".into())
        })?;
        let user = user_from_row(row)?;

        info!(facebook_id = %user.facebook_id, "created or updated user");
        Ok(user)
    }

    async fn find(&self, facebook_id: &str) -> Result<User> {
        debug!(facebook_id, "looking up user");

        let statement = Statement::new(format!(
            "MATCH (user:User {{facebookID: $facebookID}})\n\
             RETURN {USER_PROJECTION}"
        ))
        .bind("facebookID", facebook_id);

        let rows = self.executor().run(statement).await?;
        match rows.first() {
            Some(row) => user_from_row(row),
            None => {
                Err(GraphError::NotFound("user does not exist".to_string()))
            }
        }
    }

    async fn delete_user(&self, facebook_id: &str) -> Result<()> {
        if facebook_id.is_empty() {
            return Err(GraphError::MissingFields(vec!["facebookID"]));
        }

        let statement = Statement::new(
            "MATCH (user:User {facebookID: $facebookID})\n\
             DETACH DELETE user",
        )
        .bind("facebookID", facebook_id);

        self.executor().run(statement).await?;
        info!(facebook_id, "deleted user");
        Ok(())
    }

    async fn add_relationship(
        &self,
        user: &User,
        thing: &PropertyMap,
        relationship_type: RelationshipType,
    ) -> Result<User> {
        let target = relationship_type.target();
        let thing_id = thing.get(target.id_field).filter(|v| !v.is_null());

        let mut missing = Vec::new();
        if user.facebook_id.is_empty() {
            missing.push("facebookID");
        }
        if thing_id.is_none() {
            missing.push(target.id_field);
        }
        if !missing.is_empty() {
            return Err(GraphError::MissingFields(missing));
        }

        let statement = Statement::new(format!(
            "MATCH (user:User {{facebookID: $facebookID}})\n\
             MATCH (thing:{label} {{{id_field}: $thingID}})\n\
             MERGE (user)-[:{rel}]->(thing)\n\
             RETURN {USER_PROJECTION}",
            label = target.label,
            id_field = target.id_field,
            rel = relationship_type.as_str(),
        ))
        .bind("facebookID", user.facebook_id.as_str())
        .bind("thingID", thing_id.cloned().unwrap_or(Value::Null));

        let rows = self.executor().run(statement).await?;
        match rows.first() {
            Some(row) => {
                let user = user_from_row(row)?;
                info!(
                    facebook_id = %user.facebook_id,
                    relationship = %relationship_type,
                    "added relationship"
                );
                Ok(user)
            }
            None => Err(GraphError::NotFound(
                "at least one side of the relationship does not exist"
                    .to_string(),
            )),
        }
    }

    async fn remove_relationship(
        &self,
        user: &User,
        thing: &PropertyMap,
        relationship_type: RelationshipType,
    ) -> Result<User> {
        let target = relationship_type.target();
        let thing_id = thing.get(target.id_field).filter(|v| !v.is_null());

        let mut missing = Vec::new();
        if user.facebook_id.is_empty() {
            missing.push("facebookID");
        }
        if thing_id.is_none() {
            missing.push(target.id_field);
        }
        if !missing.is_empty() {
            return Err(GraphError::MissingFields(missing));
        }

        // The edge is matched optionally: with both endpoints present but
        // no edge, DELETE is a no-op and the user row still comes back, so
        // zero rows can only mean a missing endpoint.
        let statement = Statement::new(format!(
            "MATCH (user:User {{facebookID: $facebookID}})\n\
             MATCH (thing:{label} {{{id_field}: $thingID}})\n\
             OPTIONAL MATCH (user)-[edge:{rel}]->(thing)\n\
             DELETE edge\n\
             RETURN {USER_PROJECTION}",
            label = target.label,
            id_field = target.id_field,
            rel = relationship_type.as_str(),
        ))
        .bind("facebookID", user.facebook_id.as_str())
        .bind("thingID", thing_id.cloned().unwrap_or(Value::Null));

        let rows = self.executor().run(statement).await?;
        match rows.first() {
            Some(row) => {
                let user = user_from_row(row)?;
                info!(
                    facebook_id = %user.facebook_id,
                    relationship = %relationship_type,
                    "removed relationship"
                );
                Ok(user)
            }
            None => Err(GraphError::NotFound(
                "at least one side of the relationship does not exist"
                    .to_string(),
            )),
        }
    }

    async fn find_related(
        &self,
        facebook_id: &str,
        relationship_type: RelationshipType,
    ) -> Result<Vec<PropertyMap>> {
        debug!(
            facebook_id,
            relationship = %relationship_type,
            "listing related nodes"
        );

        let statement = Statement::new(format!(
            "MATCH (user:User {{facebookID: $facebookID}})-[:{rel}]->(node)\n\
             RETURN properties(node) AS node",
            rel = relationship_type.as_str(),
        ))
        .bind("facebookID", facebook_id);

        let rows = self.executor().run(statement).await?;
        rows.into_iter()
            .map(|row| match row.into_columns().remove("node") {
                Some(Value::Map(properties)) => Ok(properties),
                _ => Err(GraphError::Store(
                    "related row missing node properties".into(),
                )),
            })
            .collect()
    }

    async fn is_local(
        &self,
        facebook_id: &str,
        place_id: &str,
    ) -> Result<Vec<Row>> {
        let target = RelationshipType::IsLocal.target();

        let statement = Statement::new(format!(
            "MATCH (user:User {{facebookID: $facebookID}})\
             -[r:{rel}]->\
             (place:{label} {{{id_field}: $place_id}})\n\
             RETURN type(r) AS relationship",
            rel = RelationshipType::IsLocal.as_str(),
            label = target.label,
            id_field = target.id_field,
        ))
        .bind("facebookID", facebook_id)
        .bind("place_id", place_id);

        self.executor().run(statement).await
    }
}
