//! # Directory Errors
//!
//! Error types for directory operations.
//!
//! Wallet flows report signature rejections and conflicts as
//! `WalletAuthOutcome::Rejected`; only collaborator failures reach this type
//! from them. Password flows use `Conflict` and `InvalidCredentials` directly.

use crate::ports::outbound::GatewayError;
use shared_types::{StoreError, UniqueField};
use thiserror::Error;

/// Errors that can occur in the user directory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Email, username or wallet address already registered
    #[error("{0} already in use")]
    Conflict(UniqueField),

    /// Unknown user, missing password credential, or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Referenced user does not exist
    #[error("User not found: {0}")]
    NotFound(String),

    /// The request is well-formed but cannot be applied
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The identity store failed
    #[error("Store error: {0}")]
    Store(String),

    /// A downstream microservice failed
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl From<StoreError> for DirectoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict { field } => DirectoryError::Conflict(field),
            StoreError::NotFound(id) => DirectoryError::NotFound(id),
            StoreError::Unavailable(msg) => DirectoryError::Store(msg),
        }
    }
}
