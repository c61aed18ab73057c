use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Event already exists: {0}")]
    AlreadyExists(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
