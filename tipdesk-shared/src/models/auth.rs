use serde::{Deserialize, Serialize};

/// Credentials submitted by the back-office login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Account kind: 1 = employer back-office, 2 = withdrawal desk.
    #[serde(rename = "type")]
    pub kind: i32,
}
