use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Rewrites a unique-index violation into a domain-level conflict message.
    /// Repositories use this so duplicate class names, duplicate registrations
    /// and duplicate result declarations come back as conflicts instead of
    /// opaque database errors.
    pub fn on_unique(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    /// A database error carrying an arbitrary SQLSTATE code.
    #[derive(Debug)]
    struct FakeDbError(&'static str);

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                "23503" => sqlx::error::ErrorKind::ForeignKeyViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }
    }

    fn db_error(code: &'static str) -> StorageError {
        StorageError::Database(sqlx::Error::Database(Box::new(FakeDbError(code))))
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err = db_error("23505").on_unique("Result already declared for this event and year");

        assert!(matches!(
            err,
            StorageError::ConstraintViolation(ref m)
                if m == "Result already declared for this event and year"
        ));
    }

    #[test]
    fn test_other_database_errors_pass_through_on_unique() {
        // a CHECK violation must not be disguised as a domain conflict
        let err = db_error("23514").on_unique("duplicate");
        assert!(matches!(err, StorageError::Database(_)));

        let err = StorageError::NotFound.on_unique("duplicate");
        assert!(matches!(err, StorageError::NotFound));
    }

    #[test]
    fn test_violation_code_detection() {
        assert!(db_error("23505").is_unique_violation());
        assert!(!db_error("23505").is_foreign_key_violation());
        assert!(db_error("23503").is_foreign_key_violation());
        assert!(!db_error("23503").is_unique_violation());
        assert!(!StorageError::NotFound.is_unique_violation());
    }
}
