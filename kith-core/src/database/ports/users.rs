use async_trait::async_trait;
use kith_model::{CreateUserRequest, RelationshipType, User};

use crate::database::executor::{PropertyMap, Row};
use crate::error::Result;

// User nodes and the typed edges hanging off them. Every operation is one
// atomic request against the store; failures follow the GraphError
// taxonomy so callers can branch on validation / not-found / store.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Merge a user keyed by `facebookID` and set all profile properties,
    /// overwriting on conflict.
    ///
    /// Requires `facebook_id` and `name`; rejected with a validation error
    /// naming every missing field, before any store call, when either is
    /// absent.
    async fn create_unique_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<User>;

    /// Look up a user by `facebookID`.
    ///
    /// Not-found is distinct from a store failure so callers can decide
    /// between "create the user" and "show an error".
    async fn find(&self, facebook_id: &str) -> Result<User>;

    /// Delete a user node; the store cascades its edges.
    ///
    /// Deleting a user that does not exist succeeds: the store reports no
    /// error for a match that found nothing.
    async fn delete_user(&self, facebook_id: &str) -> Result<()>;

    /// Merge a typed edge from `user` to the entity described by `thing`
    /// (idempotent: merging an existing edge changes nothing).
    ///
    /// `thing` must carry the identifier property the relationship's
    /// target kind is keyed by. Not-found when either endpoint is absent.
    async fn add_relationship(
        &self,
        user: &User,
        thing: &PropertyMap,
        relationship_type: RelationshipType,
    ) -> Result<User>;

    /// Delete the typed edge from `user` to the entity described by
    /// `thing`.
    ///
    /// Removing an edge that does not exist is a successful no-op as long
    /// as both endpoints are present; not-found only when an endpoint is
    /// missing.
    async fn remove_relationship(
        &self,
        user: &User,
        thing: &PropertyMap,
        relationship_type: RelationshipType,
    ) -> Result<User>;

    /// Property maps of the nodes reachable from the user over edges of
    /// the given type, in store-returned order. Empty when there are none.
    async fn find_related(
        &self,
        facebook_id: &str,
        relationship_type: RelationshipType,
    ) -> Result<Vec<PropertyMap>>;

    /// Rows for the `ISLOCAL` edge between a user and a place; non-empty
    /// means the user is local to the place.
    async fn is_local(
        &self,
        facebook_id: &str,
        place_id: &str,
    ) -> Result<Vec<Row>>;
}
