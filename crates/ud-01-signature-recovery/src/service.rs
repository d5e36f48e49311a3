//! # Signature Recovery Service
//!
//! Application service layer that implements the `SignatureRecoveryApi` trait.
//!
//! The service is stateless and `Copy`; every call goes straight to the domain
//! layer. It only adds structured logging of failed verifications.

use crate::domain::entities::{Address, VerificationOutcome, WalletSignature};
use crate::domain::errors::RecoveryError;
use crate::domain::recovery;
use crate::ports::inbound::SignatureRecoveryApi;
use tracing::debug;

/// Signature Recovery Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureRecoveryService;

impl SignatureRecoveryService {
    /// Create a new signature recovery service.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureRecoveryApi for SignatureRecoveryService {
    fn recover(
        &self,
        message: &[u8],
        signature: &WalletSignature,
    ) -> Result<Address, RecoveryError> {
        recovery::recover_address(message, signature)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        claimed_address: &str,
    ) -> VerificationOutcome {
        let outcome = recovery::verify_personal_signature(message, signature, claimed_address);
        log_outcome(&outcome, claimed_address);
        outcome
    }

    fn verify_hex(
        &self,
        message: &[u8],
        signature_hex: &str,
        claimed_address: &str,
    ) -> VerificationOutcome {
        let outcome = match WalletSignature::from_hex(signature_hex) {
            Ok(signature) => recovery::verify_parsed(message, &signature, claimed_address),
            Err(e) => VerificationOutcome::Malformed(e),
        };
        log_outcome(&outcome, claimed_address);
        outcome
    }
}

fn log_outcome(outcome: &VerificationOutcome, claimed_address: &str) {
    match outcome {
        VerificationOutcome::Verified { .. } => {}
        VerificationOutcome::NotVerified { recovered } => {
            debug!(claimed = %claimed_address, recovered = %recovered, "Signer mismatch");
        }
        VerificationOutcome::Malformed(e) => {
            debug!(claimed = %claimed_address, error = %e, "Signature not recoverable");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
