use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not found with ID: {0}")]
    NotFound(u64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}
