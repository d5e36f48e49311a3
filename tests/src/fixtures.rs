//! # Shared Test Fixtures
//!
//! Wallet signing helpers and recording gateways used across the suite.

use async_trait::async_trait;
use k256::ecdsa::SigningKey;
use parking_lot::Mutex;
use shared_types::IndexUserRequest;
use std::sync::Arc;
use ud_01_signature_recovery::{personal_message_hash, SignatureRecoveryService};
use ud_02_user_directory::{
    GatewayError, InMemoryUserRepository, PasswordGateway, SearchGateway, UserDirectoryService,
};

/// First default Hardhat/Anvil account.
pub const KNOWN_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address of [`KNOWN_PRIVATE_KEY`], checksum casing.
pub const KNOWN_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// secp256k1 curve order n
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

pub fn known_key() -> SigningKey {
    let bytes = hex::decode(KNOWN_PRIVATE_KEY).expect("valid hex");
    SigningKey::from_slice(&bytes).expect("valid key")
}

pub fn random_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// `personal_sign` output as raw bytes: r || s || (27 + rec_id).
pub fn sign_personal(message: &str, key: &SigningKey) -> [u8; 65] {
    let (sig, recid) = key
        .sign_prehash_recoverable(&personal_message_hash(message.as_bytes()))
        .expect("signing failed");

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = recid.to_byte() + 27;
    out
}

/// `personal_sign` output as 0x-prefixed hex, the way clients send it.
pub fn sign_personal_hex(message: &str, key: &SigningKey) -> String {
    format!("0x{}", hex::encode(sign_personal(message, key)))
}

/// Same signature with s replaced by n - s (high-S form).
pub fn to_high_s(signature: &[u8; 65]) -> [u8; 65] {
    let mut out = *signature;
    let mut borrow: i32 = 0;
    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (signature[32 + i] as i32) - borrow;
        if diff < 0 {
            out[32 + i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            out[32 + i] = diff as u8;
            borrow = 0;
        }
    }
    out
}

/// Address of `key` in lowercase canonical form.
pub fn address_of(key: &SigningKey) -> String {
    ud_01_signature_recovery::format_address(&ud_01_signature_recovery::address_from_pubkey(
        key.verifying_key(),
    ))
}

/// Search gateway that records every index event.
#[derive(Default)]
pub struct RecordingSearchGateway {
    pub indexed: Mutex<Vec<IndexUserRequest>>,
}

#[async_trait]
impl SearchGateway for RecordingSearchGateway {
    async fn index_user(&self, request: IndexUserRequest) -> Result<(), GatewayError> {
        self.indexed.lock().push(request);
        Ok(())
    }
}

/// Password gateway with a reversible "hash" so validation can be checked.
#[derive(Default)]
pub struct PrefixPasswordGateway;

#[async_trait]
impl PasswordGateway for PrefixPasswordGateway {
    async fn hash_password(&self, password: &str) -> Result<String, GatewayError> {
        Ok(format!("hashed:{password}"))
    }

    async fn validate_password(&self, password: &str, hashed: &str) -> Result<bool, GatewayError> {
        Ok(hashed == format!("hashed:{password}"))
    }
}

pub type TestDirectory = UserDirectoryService<
    InMemoryUserRepository,
    RecordingSearchGateway,
    PrefixPasswordGateway,
    SignatureRecoveryService,
>;

/// A directory over fresh in-memory collaborators.
pub struct DirectoryHarness {
    pub directory: Arc<TestDirectory>,
    pub repository: Arc<InMemoryUserRepository>,
    pub search: Arc<RecordingSearchGateway>,
}

impl DirectoryHarness {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let search = Arc::new(RecordingSearchGateway::default());
        let directory = Arc::new(UserDirectoryService::new(
            Arc::clone(&repository),
            Arc::clone(&search),
            Arc::new(PrefixPasswordGateway),
            SignatureRecoveryService::new(),
        ));
        Self {
            directory,
            repository,
            search,
        }
    }
}

impl Default for DirectoryHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_matches_known_address() {
        assert_eq!(address_of(&known_key()), KNOWN_ADDRESS.to_lowercase());
    }

    #[test]
    fn test_high_s_is_involution() {
        let signature = sign_personal("message", &known_key());
        assert_ne!(to_high_s(&signature), signature);
        assert_eq!(to_high_s(&to_high_s(&signature)), signature);
    }
}
