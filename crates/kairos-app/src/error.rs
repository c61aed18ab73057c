use salvo::http::StatusCode;
use thiserror::Error;

use kairos_core::error::CoreError;
use kairos_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// ## Summary
    /// HTTP status a handler should answer with for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::ServiceError(ServiceError::ValidationError(_))
            | Self::CoreError(
                CoreError::InvalidInput(_) | CoreError::ParseError(_) | CoreError::ValidationError(_),
            )
            | Self::ServiceError(ServiceError::CoreError(
                CoreError::InvalidInput(_) | CoreError::ParseError(_) | CoreError::ValidationError(_),
            )) => StatusCode::BAD_REQUEST,
            Self::ServiceError(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::ServiceError(_) | Self::CoreError(CoreError::StateUnavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
