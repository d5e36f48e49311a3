//! # Personal-Message Framing
//!
//! Wallets never sign application messages directly. `personal_sign` prefixes
//! the message with a fixed header and its length, then signs the Keccak-256
//! of the framed bytes. Recovery must rebuild exactly the same bytes.

use super::entities::Hash;
use sha3::{Digest, Keccak256};

/// Header prepended by `personal_sign`. Must match wallet tooling byte-for-byte.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Build `prefix || decimal(len(message)) || message`.
///
/// The length is the UTF-8 byte length, which is what wallets hash.
pub fn frame_personal_message(message: &[u8]) -> Vec<u8> {
    let length = message.len().to_string();

    let mut framed =
        Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + length.len() + message.len());
    framed.extend_from_slice(PERSONAL_MESSAGE_PREFIX.as_bytes());
    framed.extend_from_slice(length.as_bytes());
    framed.extend_from_slice(message);
    framed
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Digest a wallet actually signs for `message`.
pub fn personal_message_hash(message: &[u8]) -> Hash {
    keccak256(&frame_personal_message(message))
}
