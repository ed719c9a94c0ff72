//! Wire types shared between the server and the web frontend.
//!
//! Everything that crosses the HTTP boundary other than the core
//! entities themselves lives here: error payloads, auth requests
//! and responses, and the combined home snapshot.

use core_types::{Category, MenuItem, Restaurant};
use serde::{Deserialize, Serialize};

/// Error payload returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message
    pub error: String,
    /// Machine-readable code, e.g. `NOT_FOUND`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error with just a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create an error with a message and a machine-readable code.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

/// Informational payload for endpoints that only confirm an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Combined snapshot returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub restaurants: Vec<Restaurant>,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

/// Body of `POST /sign_up`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT to present as `Authorization: Bearer <token>`
    pub token: String,
}
