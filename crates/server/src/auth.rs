//! Session tokens and password hashing for the admin API.
//!
//! Login issues an HS256 JWT carrying the user id and role; the
//! `/admin` routes sit behind [`require_admin`], which rejects
//! requests without a valid admin bearer token.

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use core_types::Role;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_types::ApiError;

/// Session token lifetime.
pub const TOKEN_TTL_HOURS: i64 = 72;

/// Why a request was refused at the admin gate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Admin access required")]
    NotAdmin,
}

impl AuthError {
    /// HTTP status this refusal maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::NotAdmin => StatusCode::FORBIDDEN,
        }
    }
}

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u32,
    pub role: Role,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Check a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Issue a signed session token for the given user.
pub fn issue_token(
    user_id: u32,
    role: Role,
    key: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
    let claims = Claims { user_id, role, exp };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
}

/// Validate the `Authorization` header and require the admin role.
pub fn authorize_admin(headers: &HeaderMap, key: &str) -> Result<Claims, AuthError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(key.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if data.claims.role != Role::Admin {
        return Err(AuthError::NotAdmin);
    }

    Ok(data.claims)
}

/// Middleware guarding the `/admin` routes.
pub async fn require_admin(
    State(state): State<crate::state::AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    match authorize_admin(request.headers(), &state.jwt_key) {
        Ok(_) => Ok(next.run(request).await),
        Err(err) => {
            let code = match err.status() {
                StatusCode::FORBIDDEN => "FORBIDDEN",
                _ => "UNAUTHORIZED",
            };
            Err((err.status(), Json(ApiError::with_code(err.to_string(), code))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const KEY: &str = "test-signing-key";

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_issued_admin_token_authorizes() {
        let token = issue_token(7, Role::Admin, KEY).unwrap();

        let claims = authorize_admin(&headers_with_token(&token), KEY).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = authorize_admin(&HeaderMap::new(), KEY).unwrap_err();

        assert_eq!(err, AuthError::MissingToken);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_non_bearer_header_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));

        assert_eq!(
            authorize_admin(&headers, KEY).unwrap_err(),
            AuthError::MissingToken
        );
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let token = issue_token(7, Role::Admin, "other-key").unwrap();

        assert_eq!(
            authorize_admin(&headers_with_token(&token), KEY).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_client_role_is_forbidden() {
        let token = issue_token(7, Role::Client, KEY).unwrap();

        let err = authorize_admin(&headers_with_token(&token), KEY).unwrap_err();

        assert_eq!(err, AuthError::NotAdmin);
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }
}
