use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    ConnectionPool(#[from] diesel::r2d2::PoolError),
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl RepositoryError {
    /// Message reported by the database itself, e.g. a violated constraint.
    pub fn database_message(&self) -> Option<&str> {
        match self {
            Self::Database(diesel::result::Error::DatabaseError(_, info)) => Some(info.message()),
            _ => None,
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
