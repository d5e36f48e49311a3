//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{
    FriendshipRequest, LoginRequest, RegisterRequest, WalletAuthOutcome, WalletLoginRequest,
    WalletRegisterRequest,
};
use crate::domain::errors::DirectoryError;
use async_trait::async_trait;
use shared_types::UserDto;

/// Primary User Directory API.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait UserDirectoryApi: Send + Sync {
    // =========================================================================
    // Password Identities
    // =========================================================================

    /// Register a password identity.
    ///
    /// # Errors
    /// * `Conflict(Email)` / `Conflict(Username)` - already registered
    /// * `Gateway` - password service unreachable
    async fn register_user(&self, request: RegisterRequest) -> Result<UserDto, DirectoryError>;

    /// Log in with username and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown user, wallet-only user, or wrong password
    async fn login(&self, request: LoginRequest) -> Result<UserDto, DirectoryError>;

    /// Link two users as friends in both directions.
    ///
    /// # Errors
    /// * `NotFound` - either user does not exist
    /// * `InvalidRequest` - both ids are the same
    async fn set_friends(&self, request: FriendshipRequest) -> Result<(), DirectoryError>;

    // =========================================================================
    // Wallet Identities
    // =========================================================================

    /// Log in by signature.
    ///
    /// Returns `Authenticated`, `NeedsRegistration` or `Rejected`. `Err` only
    /// for collaborator failures.
    async fn login_with_wallet(
        &self,
        request: WalletLoginRequest,
    ) -> Result<WalletAuthOutcome, DirectoryError>;

    /// Register by signature.
    ///
    /// Returns `Authenticated` with the created identity, or `Rejected`. `Err`
    /// only for collaborator failures.
    async fn register_with_wallet(
        &self,
        request: WalletRegisterRequest,
    ) -> Result<WalletAuthOutcome, DirectoryError>;
}
