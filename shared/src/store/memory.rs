use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::{debug, warn};

use super::UserStore;
use crate::error::{Result, StoreError};
use crate::models::{seed_users, User, UserInput, UserPatch};

/// Users plus the id counter, always mutated together under one lock.
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    // Strictly greater than every id ever issued; never decremented.
    next_id: u64,
}

impl UserTable {
    fn position(&self, id: u64) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// In-memory implementation of UserStore
pub struct MemoryUserStore {
    table: Mutex<UserTable>,
}

impl MemoryUserStore {
    /// Creates a new empty in-memory user store
    pub fn new() -> Self {
        Self {
            table: Mutex::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a new in-memory user store with initial data
    pub fn with_users(initial_data: Vec<User>) -> Self {
        let mut users: Vec<User> = Vec::with_capacity(initial_data.len());
        for user in initial_data {
            if users.iter().any(|u| u.id == user.id) {
                warn!("Skipping seed user with duplicate ID {}", user.id);
                continue;
            }
            users.push(user);
        }

        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        debug!(
            "Memory store initialised with {} users, next ID {}",
            users.len(),
            next_id
        );

        Self {
            table: Mutex::new(UserTable { users, next_id }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserTable>> {
        self.table
            .lock()
            .map_err(|_| StoreError::Internal("Failed to acquire store lock".into()))
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::with_users(seed_users())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let table = self.lock()?;
        Ok(table.users.clone())
    }

    async fn get_user(&self, id: u64) -> Result<User> {
        let table = self.lock()?;
        let index = table.position(id)?;
        Ok(table.users[index].clone())
    }

    async fn create_user(&self, input: UserInput) -> Result<User> {
        input.validate()?;

        let mut table = self.lock()?;
        let user = User {
            id: table.next_id,
            name: input.name,
            email: input.email,
        };
        table.next_id += 1;
        table.users.push(user.clone());

        debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn replace_user(&self, id: u64, input: UserInput) -> Result<User> {
        let mut table = self.lock()?;
        let index = table.position(id)?;

        let user = User {
            id,
            name: input.name,
            email: input.email,
        };
        table.users[index] = user.clone();

        debug!("Replaced user {}", id);
        Ok(user)
    }

    async fn patch_user(&self, id: u64, patch: UserPatch) -> Result<User> {
        let mut table = self.lock()?;
        let index = table.position(id)?;

        let user = &mut table.users[index];
        patch.apply(user);

        debug!("Patched user {}", id);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: u64) -> Result<User> {
        let mut table = self.lock()?;
        let index = table.position(id)?;
        let removed = table.users.remove(index);

        debug!("Deleted user {}", id);
        Ok(removed)
    }
}
