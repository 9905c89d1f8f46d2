use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("record not found")]
    NotFound,
    #[error("conflicting record: {0}")]
    Conflict(String),
    #[error("password hashing failed: {0}")]
    Hashing(argon2::password_hash::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("schema bootstrap is only available in development mode")]
    DevelopmentOnly,
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Error::Conflict(detail),
            _ => Error::Database(e),
        }
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(e: argon2::password_hash::Error) -> Self {
        Error::Hashing(e)
    }
}
