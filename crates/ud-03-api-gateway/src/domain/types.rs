//! Response bodies that are not plain `UserDto`.

use serde::{Deserialize, Serialize};
use shared_types::UserDto;

/// Wallet login result. `user` is absent when the wallet still needs to be
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoginResponse {
    pub needs_registration: bool,
    pub user: Option<UserDto>,
}

/// Health check body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
