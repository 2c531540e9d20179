use tl_core::{User, UserId};

use serde::Serialize;

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
