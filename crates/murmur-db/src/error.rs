use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    /// A `UNIQUE` constraint rejected the write.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),

    #[error("DB lock poisoned")]
    LockPoisoned,
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                DbError::UniqueViolation(msg.unwrap_or_else(|| e.to_string()))
            }
            other => DbError::Sqlite(other),
        }
    }
}
