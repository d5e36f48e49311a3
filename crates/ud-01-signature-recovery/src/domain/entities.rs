//! # Domain Entities
//!
//! Core data structures for signature recovery.

use super::errors::RecoveryError;
use serde::{Deserialize, Serialize};

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// Ethereum-style address derived from public key (last 20 bytes of keccak256(pubkey))
pub type Address = [u8; 20];

/// Length of a wallet signature: r (32) || s (32) || v (1).
pub const SIGNATURE_LENGTH: usize = 65;

/// ECDSA signature on the secp256k1 curve as produced by wallet `personal_sign`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery indicator, unsigned. Wallets send 0/1 or 27/28, anything else
    /// is still accepted and resolved by the recovery fallback.
    pub v: u8,
}

impl WalletSignature {
    /// Split raw bytes into r, s and v.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RecoveryError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(RecoveryError::InvalidLength(bytes.len()));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Decode hex text, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, RecoveryError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let bytes = hex::decode(digits).map_err(|_| RecoveryError::InvalidEncoding)?;
        Self::from_slice(&bytes)
    }

    /// Serialize back to r || s || v.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }
}

/// Result of checking a signature against a claimed address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The recovered signer is the claimed address.
    Verified {
        /// Recovered address in canonical form
        address: String,
    },
    /// A signer was recovered, but it is not the claimed address.
    NotVerified {
        /// Recovered address in canonical form
        recovered: String,
    },
    /// The signature could not be parsed or no signer could be recovered.
    Malformed(RecoveryError),
}

impl VerificationOutcome {
    /// Whether the claimed address is proven. Everything else counts as false.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified { .. })
    }
}
