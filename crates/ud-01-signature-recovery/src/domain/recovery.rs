//! # Signer Recovery (secp256k1)
//!
//! Pure domain logic for recovering the wallet address behind a
//! personal-message signature.
//!
//! ## Recovery Id Fallback
//!
//! `r` and `s` alone admit up to four candidate public keys. Wallets encode
//! the selector as 0/1 or 27/28, and some encode it off by one. Candidates
//! are probed in the fixed order `[rec_id, rec_id ^ 1, 2, 3]` and the first
//! id that yields any valid key wins. The candidate is never checked against
//! the claimed address here; that comparison belongs to `verify`.
//!
//! ## High-S Signatures
//!
//! k256 only recovers from low-S signatures. `(r, s, id)` and
//! `(r, n - s, id ^ 1)` denote the same public key, so a high-S signature is
//! normalized and every probed id has its parity bit flipped. The probe order
//! and the recovered key are unchanged.

use super::entities::{Address, Hash, VerificationOutcome, WalletSignature};
use super::errors::RecoveryError;
use super::framing::{keccak256, personal_message_hash};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Offset wallets add to the recovery id (Ethereum `v` convention).
const V_OFFSET: u8 = 27;

// =============================================================================
// CORE RECOVERY FUNCTIONS
// =============================================================================

/// Recovery ids to probe for a given `v`, in order.
///
/// `v < 27` is shifted up first so 0/1 and 27/28 encodings agree. Ids above 3
/// are kept in the list and simply skipped during recovery.
pub fn candidate_recovery_ids(v: u8) -> [u8; 4] {
    let v = if v < V_OFFSET { v + V_OFFSET } else { v };
    let rec_id = v - V_OFFSET;
    [rec_id, rec_id ^ 1, 2, 3]
}

/// Recover the signer address of a personal message.
pub fn recover_address(
    message: &[u8],
    signature: &WalletSignature,
) -> Result<Address, RecoveryError> {
    recover_from_prehash(&personal_message_hash(message), signature)
}

/// Recover the signer address from an already framed and hashed message.
pub fn recover_from_prehash(
    message_hash: &Hash,
    signature: &WalletSignature,
) -> Result<Address, RecoveryError> {
    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    // r or s of zero, or not below the curve order
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| RecoveryError::NotRecoverable)?;

    let (sig, parity_flip) = match sig.normalize_s() {
        Some(low_s) => (low_s, 1u8),
        None => (sig, 0u8),
    };

    for id in candidate_recovery_ids(signature.v) {
        let Some(recovery_id) = RecoveryId::from_byte(id ^ parity_flip) else {
            continue;
        };

        if let Ok(key) = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id) {
            return Ok(address_from_pubkey(&key));
        }
    }

    Err(RecoveryError::NotRecoverable)
}

/// Check that `signature` over `message` was produced by `claimed_address`.
///
/// The comparison is case-insensitive. Anything that prevents recovery is
/// reported as `Malformed`, never as a panic or an error.
pub fn verify_personal_signature(
    message: &[u8],
    signature: &[u8],
    claimed_address: &str,
) -> VerificationOutcome {
    match WalletSignature::from_slice(signature) {
        Ok(signature) => verify_parsed(message, &signature, claimed_address),
        Err(e) => VerificationOutcome::Malformed(e),
    }
}

/// Same as [`verify_personal_signature`] for an already parsed signature.
pub(crate) fn verify_parsed(
    message: &[u8],
    signature: &WalletSignature,
    claimed_address: &str,
) -> VerificationOutcome {
    match recover_address(message, signature) {
        Ok(address) => {
            let recovered = format_address(&address);
            if recovered.eq_ignore_ascii_case(claimed_address) {
                VerificationOutcome::Verified { address: recovered }
            } else {
                VerificationOutcome::NotVerified { recovered }
            }
        }
        Err(e) => VerificationOutcome::Malformed(e),
    }
}

// =============================================================================
// ADDRESS HELPERS
// =============================================================================

/// Derive Ethereum address from public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 hash of public key (without 0x04 prefix)
    let hash = keccak256(&pubkey_slice[1..]);

    // Take last 20 bytes as address
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Render an address as `0x` + lowercase hex.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Canonical form used for storage and lookup.
pub fn canonicalize_address(address: &str) -> String {
    address.to_ascii_lowercase()
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
