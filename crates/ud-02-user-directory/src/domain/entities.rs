//! # Domain Entities
//!
//! Requests accepted by the directory and the outcomes of the wallet flow.
//!
//! Requests arrive already validated by the HTTP layer (non-blank fields,
//! length limits). The directory does not re-validate their shape.

use serde::{Deserialize, Serialize};
use shared_types::{Settings, UniqueField, UserDto, UserId};
use std::fmt;
use ud_01_signature_recovery::VerificationOutcome;

// =============================================================================
// PASSWORD IDENTITY
// =============================================================================

/// Password registration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Unique email.
    pub email: String,
    /// Unique username.
    pub username: String,
    /// Plaintext password, forwarded to the password service only.
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Password login.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username to log in as.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Link two users as friends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipRequest {
    /// First user id.
    pub first_user_id: UserId,
    /// Second user id.
    pub second_user_id: UserId,
}

// =============================================================================
// WALLET IDENTITY
// =============================================================================

/// Wallet login: prove control of `wallet_address` by signing `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoginRequest {
    /// Claimed address, any casing.
    pub wallet_address: String,
    /// Plain message the wallet signed with `personal_sign`.
    pub message: String,
    /// Hex signature r || s || v.
    pub signature: String,
}

/// Wallet registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRegisterRequest {
    /// Claimed address, any casing.
    pub wallet_address: String,
    /// Plain message the wallet signed with `personal_sign`.
    pub message: String,
    /// Hex signature r || s || v.
    pub signature: String,
    /// Desired username.
    pub username: String,
    /// Initial settings. Wallet defaults apply when absent.
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Why a wallet request was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The signature does not prove the claimed address.
    SignatureNotVerified(VerificationOutcome),
    /// The address or username is already registered.
    Conflict(UniqueField),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SignatureNotVerified(VerificationOutcome::Malformed(e)) => {
                write!(f, "Signature rejected: {}", e)
            }
            Rejection::SignatureNotVerified(_) => {
                write!(f, "Signature does not match wallet address")
            }
            Rejection::Conflict(field) => write!(f, "{} already in use", field),
        }
    }
}

/// Terminal state of the wallet flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletAuthOutcome {
    /// The recovered address belongs to this identity (or was just registered to it).
    Authenticated(UserDto),
    /// Valid signature, but no identity exists for the address yet.
    NeedsRegistration,
    /// Nothing was created or returned.
    Rejected(Rejection),
}
