//! User identity as stored in the graph.

/// A registered user node.
///
/// `facebook_id` is the external identity key; the store keeps exactly one
/// `:User` node per value, so repeated creation with the same key updates in
/// place. Serialized property names match the graph properties
/// (`facebookID`, `facebookToken`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// External identity key uniquely identifying the user.
    #[cfg_attr(feature = "serde", serde(rename = "facebookID"))]
    pub facebook_id: String,
    /// Display name.
    pub name: String,
    /// Optional email address.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub email: Option<String>,
    /// Optional OAuth token for the identity provider.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "facebookToken",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub facebook_token: Option<String>,
}

/// Inbound shape for user creation.
///
/// Every field is optional so that required-field validation is a runtime
/// decision made by the data layer, before any query is issued, rather than
/// a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateUserRequest {
    /// External identity key; required by the data layer.
    #[cfg_attr(feature = "serde", serde(rename = "facebookID", default))]
    pub facebook_id: Option<String>,
    /// Display name; required by the data layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Optional email address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
    /// Optional OAuth token for the identity provider.
    #[cfg_attr(feature = "serde", serde(rename = "facebookToken", default))]
    pub facebook_token: Option<String>,
}
