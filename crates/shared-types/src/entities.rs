//! # Core Domain Entities
//!
//! Defines the identity record persisted by the directory and the shapes it
//! is projected into when it leaves the directory.
//!
//! ## Clusters
//!
//! - **Identity**: `User`, `Profile`, `Settings`, `Theme`
//! - **Projections**: `UserDto`, `IndexUserRequest`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a user record.
pub type UserId = String;

/// Avatar assigned to every new identity until the user uploads one.
pub const DEFAULT_AVATAR_URL: &str = "https://example.com/avatar.jpg";

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    /// Dark theme (default for every registration path).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

/// Public profile of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Free-text biography.
    pub bio: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Optional date of birth.
    pub birthdate: Option<NaiveDate>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            bio: String::new(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            birthdate: None,
        }
    }
}

/// Per-user application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Selected theme.
    pub theme: Theme,
    /// Whether push notifications are enabled.
    pub notifications: bool,
}

/// The persisted user record.
///
/// Wallet addresses are always stored in canonical (lowercase) form. Exactly
/// one of `password_hash` / `wallet_address` is set for records created by
/// the directory, but readers must not rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the store on first save.
    pub id: Option<UserId>,
    /// Unique across password and wallet identities.
    pub username: String,
    /// Unique when present.
    pub email: Option<String>,
    /// Hash produced by the password service.
    pub password_hash: Option<String>,
    /// Canonical lowercase `0x` address.
    pub wallet_address: Option<String>,
    /// Public profile.
    pub profile: Profile,
    /// Application settings.
    pub settings: Settings,
    /// Ids of linked friends.
    #[serde(default)]
    pub friends: Vec<UserId>,
}

impl User {
    /// Link `friend_id`, ignoring duplicates. Returns `true` if it was added.
    pub fn add_friend(&mut self, friend_id: &str) -> bool {
        if self.friends.iter().any(|f| f == friend_id) {
            return false;
        }
        self.friends.push(friend_id.to_string());
        true
    }
}

// =============================================================================
// CLUSTER B: PROJECTIONS
// =============================================================================

/// Public view of a user. Never contains credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Store id.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Email, for password identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Public profile.
    pub profile: Profile,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone().unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile: user.profile.clone(),
        }
    }
}

/// Event published to the search service after a user is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexUserRequest {
    /// Store id of the new user.
    pub id: UserId,
    /// Username to index.
    pub username: String,
}

impl From<&User> for IndexUserRequest {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone().unwrap_or_default(),
            username: user.username.clone(),
        }
    }
}
