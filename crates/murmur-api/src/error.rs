use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use murmur_db::DbError;
use thiserror::Error;
use tracing::error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome kinds of the domain services. The message of every variant
/// except `Storage` is sent to the client verbatim.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

impl ServiceError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Storage(e) => {
                error!("Storage error: {}", e);
                "An unexpected error occurred".to_string()
            }
            Self::Internal(msg) => {
                error!("Internal error: {}", msg);
                msg
            }
            Self::InvalidInput(msg) | Self::Conflict(msg) | Self::Unauthorized(msg) => msg,
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServiceError::invalid("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Storage(DbError::LockPoisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_passes_through() {
        assert_eq!(
            ServiceError::Conflict("Username already exists".into()).to_string(),
            "Username already exists"
        );
    }
}
