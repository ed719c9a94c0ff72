//! Registration and login routes.

use axum::{Json, extract::State, http::StatusCode};
use core_types::{Role, User};
use web_types::{ApiError, LoginRequest, MessageResponse, SignUpRequest, TokenResponse};

use crate::auth;
use crate::state::AppState;

type ErrorResponse = (StatusCode, Json<ApiError>);

fn internal_error(message: &str) -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(message)),
    )
}

/// POST /sign_up - Register a new admin user.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ErrorResponse> {
    let hash = auth::hash_password(req.password.trim())
        .map_err(|_| internal_error("Failed to hash password"))?;

    let mut store = state.store.write().await;

    if store.find_user_by_email(&req.email).is_some() {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiError::with_code("Email already registered", "CONFLICT")),
        ));
    }

    store.add_user(User {
        id: 0,
        name: req.name,
        email: req.email,
        password: hash,
        role: Role::Admin,
    });

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered")),
    ))
}

/// POST /login - Verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ErrorResponse> {
    let store = state.store.read().await;

    let user = store.find_user_by_email(&req.email).ok_or((
        StatusCode::UNAUTHORIZED,
        Json(ApiError::new("User not found")),
    ))?;

    if !auth::verify_password(req.password.trim(), &user.password) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiError::new("Wrong password")),
        ));
    }

    let token = auth::issue_token(user.id, user.role, &state.jwt_key)
        .map_err(|_| internal_error("Failed to create token"))?;

    Ok(Json(TokenResponse { token }))
}
