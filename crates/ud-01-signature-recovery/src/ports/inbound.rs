//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{Address, VerificationOutcome, WalletSignature};
use crate::domain::errors::RecoveryError;

/// Primary Signature Recovery API.
///
/// This is the entry point the user directory depends on. Implementations
/// must be thread-safe (`Send + Sync`) and must never panic on client input.
pub trait SignatureRecoveryApi: Send + Sync {
    /// Recover the signer's address from a personal-message signature.
    fn recover(
        &self,
        message: &[u8],
        signature: &WalletSignature,
    ) -> Result<Address, RecoveryError>;

    /// Check raw signature bytes against a claimed address.
    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        claimed_address: &str,
    ) -> VerificationOutcome;

    /// Check a hex-encoded signature (as sent by wallets) against a claimed
    /// address. Undecodable hex is `Malformed`.
    fn verify_hex(
        &self,
        message: &[u8],
        signature_hex: &str,
        claimed_address: &str,
    ) -> VerificationOutcome;
}
