//! # User Directory Subsystem (UD-02)
//!
//! Registration, login and friendship linking for chat users.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Requests, outcomes, record defaults, errors
//! - **Ports Layer** (`ports/`): Inbound API, outbound store and microservice gateways
//! - **Service Layer** (`service.rs`): The registration and login flows
//! - **Adapters** (`adapters/`): In-memory identity store
//!
//! ## Wallet Flow
//!
//! ```text
//! Start ──verify──→ Rejected(signature)
//!   │
//!   └──continue──→ lookup/create ──→ Authenticated | NeedsRegistration | Rejected(conflict)
//! ```
//!
//! The address used for lookup and storage is the one recovered from the
//! signature, in canonical lowercase form. The claimed address is only
//! compared against it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryUserRepository;
pub use domain::entities::{
    FriendshipRequest, LoginRequest, RegisterRequest, Rejection, WalletAuthOutcome,
    WalletLoginRequest, WalletRegisterRequest,
};
pub use domain::errors::DirectoryError;
pub use ports::inbound::UserDirectoryApi;
pub use ports::outbound::{GatewayError, PasswordGateway, SearchGateway, UserRepository};
pub use service::UserDirectoryService;
