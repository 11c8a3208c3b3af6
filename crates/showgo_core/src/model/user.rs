//! User domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user account.
pub type UserId = Uuid;

/// Registered site user.
///
/// `password` is opaque to the store; it is neither hashed nor inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

impl User {
    /// Builds the stored record from an insert payload.
    pub fn from_new(id: UserId, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            password: input.password,
        }
    }
}

/// Insert payload for a user.
///
/// Both fields are required on the wire and stored verbatim; uniqueness is
/// an exact comparison on `username`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
