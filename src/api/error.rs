// ==========================================
// Substitute Scheduler - API layer error types
// ==========================================
// Role: convert repository errors into user-facing business errors
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

use crate::repository::error::RepositoryError;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Business rule errors
    // ==========================================
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    ValidationError(String),

    // ==========================================
    // Data access errors
    // ==========================================
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) não encontrado", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("lock acquisition failed: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg)
            | RepositoryError::ForeignKeyViolation(msg) => ApiError::DatabaseError(msg),
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Teacher".to_string(),
            id: "T001".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Teacher"));
                assert!(msg.contains("T001"));
            }
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_lock_error_conversion() {
        let api_err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        match api_err {
            ApiError::DatabaseConnectionError(msg) => assert!(msg.contains("poisoned")),
            _ => panic!("Expected DatabaseConnectionError"),
        }
    }
}
