use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No operator available")]
    NoOperatorAvailable,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Store error: {0}")]
    Store(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Row not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                // Constraint violations and lock contention are both
                // conflicts: the caller may retry, the store is intact.
                if message.contains("UNIQUE")
                    || message.contains("unique")
                    || message.contains("constraint")
                    || message.contains("locked")
                    || message.contains("busy")
                {
                    DomainError::Conflict(message)
                } else {
                    DomainError::Store(message)
                }
            }
            other => DomainError::Store(other.to_string()),
        }
    }
}
