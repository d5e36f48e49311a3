//! # Error Types
//!
//! Defines error types raised by identity stores.

use std::fmt;
use thiserror::Error;

/// A field the store keeps unique across all identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    /// Email of a password identity.
    Email,
    /// Username (shared namespace for password and wallet identities).
    Username,
    /// Canonical wallet address.
    WalletAddress,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => write!(f, "Email"),
            UniqueField::Username => write!(f, "Username"),
            UniqueField::WalletAddress => write!(f, "Wallet address"),
        }
    }
}

/// Errors that can occur in an identity store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("{field} already in use")]
    Conflict { field: UniqueField },

    /// No record with this id.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached or failed internally.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
