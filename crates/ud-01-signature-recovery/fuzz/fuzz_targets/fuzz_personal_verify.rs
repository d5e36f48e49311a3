//! Fuzz target for personal-message signature verification.
//!
//! This fuzz target tests the robustness of the recovery logic against
//! malformed and adversarial inputs.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ud-01-signature-recovery
//! cargo +nightly fuzz run fuzz_personal_verify
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use ud_01_signature_recovery::{SignatureRecoveryApi, SignatureRecoveryService, VerificationOutcome};

/// Fuzz input structure for verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Application message (framed before hashing)
    message: Vec<u8>,
    /// Signature bytes of any length
    signature: Vec<u8>,
    /// Claimed address text
    claimed: String,
}

fuzz_target!(|input: FuzzInput| {
    let service = SignatureRecoveryService::new();

    // Verify - this should NEVER panic, regardless of input
    let outcome = service.verify(&input.message, &input.signature, &input.claimed);

    // 1. Result should be deterministic
    let outcome2 = service.verify(&input.message, &input.signature, &input.claimed);
    assert_eq!(outcome, outcome2);

    // 2. Wrong length is always malformed
    if input.signature.len() != 65 {
        assert!(matches!(outcome, VerificationOutcome::Malformed(_)));
    }

    // 3. A verified outcome always carries the canonical form of the claim
    if let VerificationOutcome::Verified { address } = &outcome {
        assert_eq!(address, &input.claimed.to_ascii_lowercase());
    }
});
