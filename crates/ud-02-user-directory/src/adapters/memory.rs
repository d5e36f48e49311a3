//! # In-Memory Identity Store
//!
//! `UserRepository` backed by hash maps behind a single `RwLock`.
//!
//! Uniqueness of email, username and wallet address is checked and applied
//! under the same write lock as the insert, so two concurrent registrations
//! for one address cannot both succeed: the loser gets
//! `StoreError::Conflict`.

use crate::ports::outbound::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{StoreError, UniqueField, User, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    by_username: HashMap<String, UserId>,
    by_email: HashMap<String, UserId>,
    by_wallet: HashMap<String, UserId>,
}

impl Inner {
    fn put(&mut self, mut user: User) -> Result<User, StoreError> {
        let current = user.id.as_deref();

        check_unique(
            &self.by_username,
            Some(user.username.as_str()),
            current,
            UniqueField::Username,
        )?;
        check_unique(&self.by_email, user.email.as_deref(), current, UniqueField::Email)?;
        check_unique(
            &self.by_wallet,
            user.wallet_address.as_deref(),
            current,
            UniqueField::WalletAddress,
        )?;

        let id = user
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Some(previous) = self.users.remove(&id) {
            self.by_username.remove(&previous.username);
            if let Some(email) = &previous.email {
                self.by_email.remove(email);
            }
            if let Some(address) = &previous.wallet_address {
                self.by_wallet.remove(address);
            }
        }

        user.id = Some(id.clone());
        self.by_username.insert(user.username.clone(), id.clone());
        if let Some(email) = &user.email {
            self.by_email.insert(email.clone(), id.clone());
        }
        if let Some(address) = &user.wallet_address {
            self.by_wallet.insert(address.clone(), id.clone());
        }
        self.users.insert(id, user.clone());

        Ok(user)
    }

    fn link(&mut self, first_id: &str, second_id: &str) -> Result<(), StoreError> {
        for id in [first_id, second_id] {
            if !self.users.contains_key(id) {
                return Err(StoreError::NotFound(id.to_string()));
            }
        }
        if let Some(first) = self.users.get_mut(first_id) {
            first.add_friend(second_id);
        }
        if let Some(second) = self.users.get_mut(second_id) {
            second.add_friend(first_id);
        }
        Ok(())
    }

    fn lookup(&self, index: &HashMap<String, UserId>, key: &str) -> Option<User> {
        index.get(key).and_then(|id| self.users.get(id)).cloned()
    }
}

fn check_unique(
    index: &HashMap<String, UserId>,
    key: Option<&str>,
    current: Option<&str>,
    field: UniqueField,
) -> Result<(), StoreError> {
    let Some(key) = key else {
        return Ok(());
    };
    match index.get(key) {
        Some(owner) if Some(owner.as_str()) != current => Err(StoreError::Conflict { field }),
        _ => Ok(()),
    }
}

/// In-memory identity store. Cloning shares the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities.
    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    /// Whether the store holds no identities.
    pub fn is_empty(&self) -> bool {
        self.inner.read().users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().by_email.contains_key(email))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().by_username.contains_key(username))
    }

    async fn exists_by_wallet_address(&self, address: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().by_wallet.contains_key(address))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.lookup(&inner.by_username, username))
    }

    async fn find_by_wallet_address(&self, address: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.lookup(&inner.by_wallet, address))
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        self.inner.write().put(user)
    }

    async fn link_friends(&self, first_id: &str, second_id: &str) -> Result<(), StoreError> {
        self.inner.write().link(first_id, second_id)
    }
}
