use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateUsernameRequest {
    pub username: String,
}
