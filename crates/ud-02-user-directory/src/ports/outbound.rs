//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs.

use async_trait::async_trait;
use shared_types::{IndexUserRequest, StoreError, User};
use thiserror::Error;

/// Error from a downstream microservice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The service could not be reached or timed out
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with an unexpected status or body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Identity store.
///
/// Implementations must enforce email, username and wallet address
/// uniqueness themselves and report violations as `StoreError::Conflict`.
/// The directory's existence checks are only a fast path.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether any identity uses this email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Whether any identity uses this username.
    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError>;

    /// Whether any identity owns this canonical address.
    async fn exists_by_wallet_address(&self, address: &str) -> Result<bool, StoreError>;

    /// Look up by store id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Look up by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Look up by canonical address.
    async fn find_by_wallet_address(&self, address: &str) -> Result<Option<User>, StoreError>;

    /// Insert or update. Assigns an id on first save.
    async fn save(&self, user: User) -> Result<User, StoreError>;

    /// Add each user to the other's friend list in one atomic step.
    ///
    /// Must not overwrite links added concurrently. Existing links are kept
    /// as-is. Fails with `StoreError::NotFound` naming the first missing id,
    /// in which case neither record changes.
    async fn link_friends(&self, first_id: &str, second_id: &str) -> Result<(), StoreError>;
}

/// Gateway to the search-indexing service.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Make a new user searchable.
    async fn index_user(&self, request: IndexUserRequest) -> Result<(), GatewayError>;
}

/// Gateway to the password-hashing service.
#[async_trait]
pub trait PasswordGateway: Send + Sync {
    /// Hash a plaintext password.
    async fn hash_password(&self, password: &str) -> Result<String, GatewayError>;

    /// Check a plaintext password against a stored hash.
    async fn validate_password(&self, password: &str, hashed: &str)
        -> Result<bool, GatewayError>;
}
