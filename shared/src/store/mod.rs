use async_trait::async_trait;

use crate::error::Result;
use crate::models::{User, UserInput, UserPatch};

// Add the memory store implementation
pub mod memory;

pub use memory::MemoryUserStore;

/// UserStore trait defining the interface for user storage implementations
///
/// Every method is a single atomic step: an implementation must not let two
/// calls interleave their read-modify-write of the collection or id counter.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Lists all users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Gets a user by ID
    async fn get_user(&self, id: u64) -> Result<User>;

    /// Validates the input, assigns the next ID and appends the user
    async fn create_user(&self, input: UserInput) -> Result<User>;

    /// Overwrites every mutable field of an existing user, keeping its position
    async fn replace_user(&self, id: u64, input: UserInput) -> Result<User>;

    /// Writes only the fields present in the patch
    async fn patch_user(&self, id: u64, patch: UserPatch) -> Result<User>;

    /// Removes a user and returns the removed record
    async fn delete_user(&self, id: u64) -> Result<User>;
}
