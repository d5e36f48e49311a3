//! Request validation at the gate.
//!
//! Field checks run before the directory is called so malformed input never
//! reaches the store or the downstream services.

use crate::domain::error::ApiError;
use ud_02_user_directory::{
    FriendshipRequest, LoginRequest, RegisterRequest, WalletLoginRequest, WalletRegisterRequest,
};

pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 24;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

fn not_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_request(format!("{field} must not be blank")));
    }
    Ok(())
}

fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::invalid_request(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Loose address check: one `@` with non-empty parts and no whitespace.
fn email(value: &str) -> Result<(), ApiError> {
    not_blank("email", value)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(ApiError::invalid_request("email must be a valid address"));
    }
    Ok(())
}

fn username(value: &str) -> Result<(), ApiError> {
    not_blank("username", value)?;
    length_between("username", value, USERNAME_MIN_LEN, USERNAME_MAX_LEN)
}

fn wallet_fields(address: &str, message: &str, signature: &str) -> Result<(), ApiError> {
    not_blank("walletAddress", address)?;
    not_blank("message", message)?;
    not_blank("signature", signature)
}

pub fn validate_register(request: &RegisterRequest) -> Result<(), ApiError> {
    email(&request.email)?;
    username(&request.username)?;
    length_between(
        "password",
        &request.password,
        PASSWORD_MIN_LEN,
        PASSWORD_MAX_LEN,
    )
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ApiError> {
    not_blank("username", &request.username)?;
    not_blank("password", &request.password)
}

pub fn validate_friendship(request: &FriendshipRequest) -> Result<(), ApiError> {
    not_blank("firstUserId", &request.first_user_id)?;
    not_blank("secondUserId", &request.second_user_id)
}

pub fn validate_wallet_login(request: &WalletLoginRequest) -> Result<(), ApiError> {
    wallet_fields(&request.wallet_address, &request.message, &request.signature)
}

pub fn validate_wallet_register(request: &WalletRegisterRequest) -> Result<(), ApiError> {
    wallet_fields(&request.wallet_address, &request.message, &request.signature)?;
    username(&request.username)
}
