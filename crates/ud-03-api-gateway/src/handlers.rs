//! Route handlers.
//!
//! Each handler parses the body, validates it, calls the directory and maps
//! the result. No business rules live here.

use crate::domain::error::ApiError;
use crate::domain::types::{HealthResponse, WalletLoginResponse};
use crate::domain::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shared_types::UserDto;
use std::sync::Arc;
use tracing::debug;
use ud_02_user_directory::{
    FriendshipRequest, LoginRequest, RegisterRequest, UserDirectoryApi, WalletAuthOutcome,
    WalletLoginRequest, WalletRegisterRequest,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectoryApi>,
}

fn parse<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected request body");
            Err(ApiError::invalid_request(rejection.body_text()))
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /api/users/register
pub async fn register_user(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let request = parse(body)?;
    validation::validate_register(&request)?;

    let user = state.directory.register_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let request = parse(body)?;
    validation::validate_login(&request)?;

    let user = state.directory.login(request).await?;
    Ok(Json(user))
}

/// POST /api/users/friends
pub async fn set_friends(
    State(state): State<AppState>,
    body: Result<Json<FriendshipRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let request = parse(body)?;
    validation::validate_friendship(&request)?;

    state.directory.set_friends(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/users/wallet/login
pub async fn wallet_login(
    State(state): State<AppState>,
    body: Result<Json<WalletLoginRequest>, JsonRejection>,
) -> Result<Json<WalletLoginResponse>, ApiError> {
    let request = parse(body)?;
    validation::validate_wallet_login(&request)?;

    match state.directory.login_with_wallet(request).await? {
        WalletAuthOutcome::Authenticated(user) => Ok(Json(WalletLoginResponse {
            needs_registration: false,
            user: Some(user),
        })),
        WalletAuthOutcome::NeedsRegistration => Ok(Json(WalletLoginResponse {
            needs_registration: true,
            user: None,
        })),
        WalletAuthOutcome::Rejected(rejection) => Err(rejection.into()),
    }
}

/// POST /api/users/wallet/register
pub async fn wallet_register(
    State(state): State<AppState>,
    body: Result<Json<WalletRegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let request = parse(body)?;
    validation::validate_wallet_register(&request)?;

    match state.directory.register_with_wallet(request).await? {
        WalletAuthOutcome::Authenticated(user) => Ok((StatusCode::CREATED, Json(user))),
        WalletAuthOutcome::Rejected(rejection) => Err(rejection.into()),
        WalletAuthOutcome::NeedsRegistration => Err(ApiError::internal(
            "registration finished without creating a user",
        )),
    }
}
