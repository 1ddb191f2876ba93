use sqlx::error::ErrorKind;
use thiserror::Error;

/// Failure of a single store statement.
///
/// An empty result is never reported through this type; lookups that match
/// nothing return an empty `Vec`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Unique constraint rejected the row (e.g. a duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Foreign-key, not-null or check constraint rejected the row
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be reached or dropped the connection
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RepositoryError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Whether retrying the same statement later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let message = match db_err.constraint() {
                Some(constraint) => format!("{} ({})", db_err.message(), constraint),
                None => db_err.message().to_string(),
            };
            return match db_err.kind() {
                ErrorKind::UniqueViolation => Self::Conflict(message),
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(message),
                _ => Self::Database(err),
            };
        }

        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::SerializationError(err.to_string()),
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct FakeDatabaseError {
        kind: ErrorKind,
    }

    impl std::fmt::Display for FakeDatabaseError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake database error")
        }
    }

    impl StdError for FakeDatabaseError {}

    impl sqlx::error::DatabaseError for FakeDatabaseError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            None
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            Some("users_email_key")
        }

        fn kind(&self) -> ErrorKind {
            match &self.kind {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                ErrorKind::CheckViolation => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn database_error(kind: ErrorKind) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDatabaseError { kind }))
    }

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err: RepositoryError = database_error(ErrorKind::UniqueViolation).into();

        assert!(err.is_conflict());
        assert!(err.to_string().contains("users_email_key"));
    }

    #[test]
    fn test_foreign_key_violation_maps_to_constraint_violation() {
        let err: RepositoryError = database_error(ErrorKind::ForeignKeyViolation).into();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }

    #[test]
    fn test_not_null_violation_maps_to_constraint_violation() {
        let err: RepositoryError = database_error(ErrorKind::NotNullViolation).into();

        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_check_violation_maps_to_constraint_violation() {
        let err: RepositoryError = database_error(ErrorKind::CheckViolation).into();

        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_other_database_error_is_passed_through() {
        let err: RepositoryError = database_error(ErrorKind::Other).into();
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_pool_timeout_is_transient() {
        let err: RepositoryError = sqlx::Error::PoolTimedOut.into();

        assert!(matches!(err, RepositoryError::Unavailable(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_io_error_is_transient() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err: RepositoryError = sqlx::Error::Io(io).into();
        assert!(err.is_transient());
    }

    #[test]
    fn test_missing_column_maps_to_serialization_error() {
        let err: RepositoryError = sqlx::Error::ColumnNotFound("average_rating".into()).into();
        assert!(matches!(err, RepositoryError::SerializationError(_)));
    }

    #[test]
    fn test_row_not_found_is_not_transient() {
        let err: RepositoryError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, RepositoryError::Database(_)));
        assert!(!err.is_transient());
        assert!(!err.is_conflict());
    }
}
