use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] kairos_store::error::StoreError),

    #[error(transparent)]
    CoreError(#[from] kairos_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ServiceError {
    /// Whether the error means the targeted event does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::StoreError(kairos_store::error::StoreError::NotFound(_))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
