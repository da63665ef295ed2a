pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{ApiResponse, HealthResponse, User, UserInput, UserPatch};
pub use store::{MemoryUserStore, UserStore};


// Test utilities - publicly exposed with test feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
