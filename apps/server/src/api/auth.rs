use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use spendfolio_core::errors::{Error, ValidationError};
use spendfolio_core::users::NewUser;

use crate::auth::{AuthError, CurrentUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserDto};

/// Register a new account. A fresh token is returned so registration also
/// logs the user in, matching the login flow.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if body.password.is_empty() {
        return Err(
            Error::Validation(ValidationError::MissingField("password".to_string())).into(),
        );
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state
        .user_service
        .register_user(NewUser {
            id: None,
            username: body.username,
            password_hash,
        })
        .await?;

    let access_token = state.auth.issue_token(&user.id)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            user: user.into(),
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .user_service
        .get_user_by_username(body.username.trim())?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.auth.verify_password(&body.password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials.into());
    }

    let access_token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse {
        access_token,
        user: user.into(),
    }))
}

async fn me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserDto>> {
    Ok(Json(user.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}
