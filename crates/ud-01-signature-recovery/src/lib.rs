//! # Signature Recovery Subsystem (UD-01)
//!
//! Recovers the wallet address that produced a personal-message signature and
//! checks it against the address a client claims to own.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Framing, recovery and address derivation, no I/O
//! - **Ports Layer** (`ports/`): The inbound API trait consumed by the directory
//! - **Service Layer** (`service.rs`): Implements the API over the domain functions
//!
//! ## Security Notes
//!
//! - **Replay Scoping**: Every message is re-framed with the personal-message
//!   prefix before hashing, so a signature cannot double as a raw transaction
//!   signature.
//! - **Zero-Trust**: The recovered address is the identity. The claimed address
//!   is only ever compared against it.
//! - **No Panics**: Malformed input becomes `VerificationOutcome::Malformed`.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    Address, Hash, VerificationOutcome, WalletSignature, SIGNATURE_LENGTH,
};
pub use domain::errors::RecoveryError;
pub use domain::framing::{
    frame_personal_message, keccak256, personal_message_hash, PERSONAL_MESSAGE_PREFIX,
};
pub use domain::recovery::{
    address_from_pubkey, candidate_recovery_ids, canonicalize_address, format_address,
    recover_address, recover_from_prehash, verify_personal_signature,
};
pub use ports::inbound::SignatureRecoveryApi;
pub use service::SignatureRecoveryService;
