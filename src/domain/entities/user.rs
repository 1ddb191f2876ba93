use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// A row of `users` as returned by `INSERT ... RETURNING *`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Credential hash, opaque to the data-access layer
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields required to insert a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Projection returned by the email lookup, which only selects `email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEmail {
    pub email: String,
}

/// Projection returned by the id lookup, which only selects `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
}
