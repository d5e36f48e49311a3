//! # Record Defaults
//!
//! Builders for freshly registered identities.
//!
//! The two registration paths disagree on the notification default: password
//! users start with notifications on, wallet users with them off. Both values
//! are kept as observed until a product decision settles them.

use shared_types::{Profile, Settings, Theme, User};

/// Notification default for password registration.
pub const PASSWORD_NOTIFICATIONS_DEFAULT: bool = true;

/// Notification default for wallet registration.
pub const WALLET_NOTIFICATIONS_DEFAULT: bool = false;

/// Settings for a new password identity.
pub fn password_user_settings() -> Settings {
    Settings {
        theme: Theme::Dark,
        notifications: PASSWORD_NOTIFICATIONS_DEFAULT,
    }
}

/// Settings for a new wallet identity.
pub fn wallet_user_settings() -> Settings {
    Settings {
        theme: Theme::Dark,
        notifications: WALLET_NOTIFICATIONS_DEFAULT,
    }
}

/// Unsaved password identity.
pub fn new_password_user(username: &str, email: &str, password_hash: String) -> User {
    User {
        id: None,
        username: username.to_string(),
        email: Some(email.to_string()),
        password_hash: Some(password_hash),
        wallet_address: None,
        profile: Profile::default(),
        settings: password_user_settings(),
        friends: Vec::new(),
    }
}

/// Unsaved wallet identity. `canonical_address` must already be lowercase.
pub fn new_wallet_user(
    username: &str,
    canonical_address: &str,
    settings: Option<Settings>,
) -> User {
    User {
        id: None,
        username: username.to_string(),
        email: None,
        password_hash: None,
        wallet_address: Some(canonical_address.to_string()),
        profile: Profile::default(),
        settings: settings.unwrap_or_else(wallet_user_settings),
        friends: Vec::new(),
    }
}
