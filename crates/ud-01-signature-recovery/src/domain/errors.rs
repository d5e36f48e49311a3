//! # Recovery Errors
//!
//! Error types for signature parsing and public-key recovery.
//!
//! None of these cross the directory boundary as failures. They are carried
//! inside `VerificationOutcome::Malformed` so callers can tell "did not match"
//! apart from "could not even be recovered".

use thiserror::Error;

/// Errors that can occur while recovering a signer address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// The signature text is not valid hex
    #[error("Invalid signature encoding")]
    InvalidEncoding,

    /// The signature is not exactly 65 bytes
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// No candidate recovery id yields a valid public key
    #[error("Failed to recover public key")]
    NotRecoverable,
}
