//! # User Directory Service
//!
//! Application service layer that implements the `UserDirectoryApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`UserDirectoryApi`)
//! - Uses the outbound ports (`UserRepository`, `SearchGateway`, `PasswordGateway`)
//! - Delegates signature checks to UD-01 (`SignatureRecoveryApi`)
//!
//! ## Wallet Flow Guarantees
//!
//! - A failed verification returns `Rejected` before the store is touched.
//! - Lookup and storage use the recovered address in lowercase.
//! - A store-level conflict on save (lost race) is reported as
//!   `Rejected(Conflict)`, same as a conflict caught by the pre-check.

use crate::domain::defaults::{new_password_user, new_wallet_user};
use crate::domain::entities::{
    FriendshipRequest, LoginRequest, RegisterRequest, Rejection, WalletAuthOutcome,
    WalletLoginRequest, WalletRegisterRequest,
};
use crate::domain::errors::DirectoryError;
use crate::ports::inbound::UserDirectoryApi;
use crate::ports::outbound::{PasswordGateway, SearchGateway, UserRepository};
use async_trait::async_trait;
use shared_types::{IndexUserRequest, StoreError, UniqueField, User, UserDto};
use std::sync::Arc;
use tracing::{debug, info, warn};
use ud_01_signature_recovery::{canonicalize_address, SignatureRecoveryApi, VerificationOutcome};

/// User Directory Service.
pub struct UserDirectoryService<R, S, P, V>
where
    R: UserRepository,
    S: SearchGateway,
    P: PasswordGateway,
    V: SignatureRecoveryApi,
{
    repository: Arc<R>,
    search: Arc<S>,
    passwords: Arc<P>,
    signatures: V,
}

impl<R, S, P, V> UserDirectoryService<R, S, P, V>
where
    R: UserRepository,
    S: SearchGateway,
    P: PasswordGateway,
    V: SignatureRecoveryApi,
{
    /// Create a new user directory service.
    ///
    /// # Arguments
    /// * `repository` - Identity store enforcing uniqueness
    /// * `search` - Search-indexing gateway
    /// * `passwords` - Password-hashing gateway
    /// * `signatures` - Signature recovery (UD-01)
    pub fn new(repository: Arc<R>, search: Arc<S>, passwords: Arc<P>, signatures: V) -> Self {
        Self {
            repository,
            search,
            passwords,
            signatures,
        }
    }

    /// Verify the wallet signature. `Ok(address)` carries the recovered
    /// canonical address, `Err` the rejection to return as-is.
    fn verify_wallet(
        &self,
        claimed_address: &str,
        message: &str,
        signature: &str,
    ) -> Result<String, Rejection> {
        match self
            .signatures
            .verify_hex(message.as_bytes(), signature, claimed_address)
        {
            VerificationOutcome::Verified { address } => Ok(canonicalize_address(&address)),
            outcome => {
                info!(claimed = %claimed_address, "Wallet signature rejected");
                Err(Rejection::SignatureNotVerified(outcome))
            }
        }
    }

    /// Publish the index event. Failures are logged, never propagated.
    async fn publish_index(&self, user: &User) {
        let request = IndexUserRequest::from(user);
        if let Err(e) = self.search.index_user(request).await {
            warn!(user_id = ?user.id, error = %e, "Failed to index user");
        }
    }

    fn ensure_unique(field: UniqueField, exists: bool) -> Result<(), UniqueField> {
        if exists {
            debug!(%field, "Uniqueness pre-check failed");
            return Err(field);
        }
        Ok(())
    }
}

#[async_trait]
impl<R, S, P, V> UserDirectoryApi for UserDirectoryService<R, S, P, V>
where
    R: UserRepository,
    S: SearchGateway,
    P: PasswordGateway,
    V: SignatureRecoveryApi,
{
    async fn register_user(&self, request: RegisterRequest) -> Result<UserDto, DirectoryError> {
        let email_taken = self.repository.exists_by_email(&request.email).await?;
        Self::ensure_unique(UniqueField::Email, email_taken)
            .map_err(DirectoryError::Conflict)?;

        let username_taken = self.repository.exists_by_username(&request.username).await?;
        Self::ensure_unique(UniqueField::Username, username_taken)
            .map_err(DirectoryError::Conflict)?;

        let password_hash = self.passwords.hash_password(&request.password).await?;
        let user = new_password_user(&request.username, &request.email, password_hash);

        let saved = self.repository.save(user).await?;
        info!(user_id = ?saved.id, username = %saved.username, "Registered password user");

        self.publish_index(&saved).await;
        Ok(UserDto::from(&saved))
    }

    async fn login(&self, request: LoginRequest) -> Result<UserDto, DirectoryError> {
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or(DirectoryError::InvalidCredentials)?;

        // Wallet-only identities have no password to check against
        let Some(hashed) = user.password_hash.as_deref() else {
            info!(username = %request.username, "Password login for wallet identity");
            return Err(DirectoryError::InvalidCredentials);
        };

        if !self
            .passwords
            .validate_password(&request.password, hashed)
            .await?
        {
            info!(username = %request.username, "Password rejected");
            return Err(DirectoryError::InvalidCredentials);
        }

        Ok(UserDto::from(&user))
    }

    async fn set_friends(&self, request: FriendshipRequest) -> Result<(), DirectoryError> {
        if request.first_user_id == request.second_user_id {
            return Err(DirectoryError::InvalidRequest(
                "a user cannot befriend themselves".into(),
            ));
        }

        self.repository
            .link_friends(&request.first_user_id, &request.second_user_id)
            .await?;
        info!(
            first = %request.first_user_id,
            second = %request.second_user_id,
            "Linked friends"
        );
        Ok(())
    }

    async fn login_with_wallet(
        &self,
        request: WalletLoginRequest,
    ) -> Result<WalletAuthOutcome, DirectoryError> {
        let address = match self.verify_wallet(
            &request.wallet_address,
            &request.message,
            &request.signature,
        ) {
            Ok(address) => address,
            Err(rejection) => return Ok(WalletAuthOutcome::Rejected(rejection)),
        };

        match self.repository.find_by_wallet_address(&address).await? {
            Some(user) => {
                info!(%address, user_id = ?user.id, "Wallet login");
                Ok(WalletAuthOutcome::Authenticated(UserDto::from(&user)))
            }
            None => {
                info!(%address, "Wallet not registered");
                Ok(WalletAuthOutcome::NeedsRegistration)
            }
        }
    }

    async fn register_with_wallet(
        &self,
        request: WalletRegisterRequest,
    ) -> Result<WalletAuthOutcome, DirectoryError> {
        let address = match self.verify_wallet(
            &request.wallet_address,
            &request.message,
            &request.signature,
        ) {
            Ok(address) => address,
            Err(rejection) => return Ok(WalletAuthOutcome::Rejected(rejection)),
        };

        let address_taken = self.repository.exists_by_wallet_address(&address).await?;
        if let Err(field) = Self::ensure_unique(UniqueField::WalletAddress, address_taken) {
            return Ok(WalletAuthOutcome::Rejected(Rejection::Conflict(field)));
        }

        let username_taken = self.repository.exists_by_username(&request.username).await?;
        if let Err(field) = Self::ensure_unique(UniqueField::Username, username_taken) {
            return Ok(WalletAuthOutcome::Rejected(Rejection::Conflict(field)));
        }

        let user = new_wallet_user(&request.username, &address, request.settings);
        let saved = match self.repository.save(user).await {
            Ok(saved) => saved,
            Err(StoreError::Conflict { field }) => {
                info!(%address, %field, "Wallet registration lost uniqueness race");
                return Ok(WalletAuthOutcome::Rejected(Rejection::Conflict(field)));
            }
            Err(e) => return Err(e.into()),
        };
        info!(%address, user_id = ?saved.id, username = %saved.username, "Registered wallet user");

        self.publish_index(&saved).await;
        Ok(WalletAuthOutcome::Authenticated(UserDto::from(&saved)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
