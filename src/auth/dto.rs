use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;

/// Returned by a successful registration. `password` carries the stored hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password_hash,
        }
    }
}

/// Returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
