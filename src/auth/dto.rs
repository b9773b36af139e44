//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email + password pair. Register and login accept the same shape.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// A fresh token pair and the account it belongs to; register, login
/// and refresh all answer with this.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// The slice of a user record that is safe to hand to clients.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
}
