//! User domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
///
/// The password hash is an opaque string produced by the server crate;
/// core services store and return it without interpreting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input model for registering a new user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub username: String,
    pub password_hash: String,
}
