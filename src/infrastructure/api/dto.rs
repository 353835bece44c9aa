use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Account name.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
}
