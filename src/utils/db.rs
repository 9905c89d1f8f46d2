use crate::data::error::Error;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub async fn connect(db_url: &str) -> Result<DatabaseConnection, Error> {
    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    if db_url.starts_with("sqlite::memory:") {
        // Each pooled connection would otherwise see its own empty database.
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await.warn_err()
}

pub trait StandardizeError<V> {
    fn warn_err(self) -> Result<V, Error>;
    fn debug_err(self) -> Result<V, Error>;
}

impl<V> StandardizeError<V> for Result<V, DbErr> {
    fn warn_err(self) -> Result<V, Error> {
        self.map_err(|e| {
            tracing::warn!("database error: {}", e);
            e.into()
        })
    }

    fn debug_err(self) -> Result<V, Error> {
        self.map_err(|e| {
            tracing::debug!("database error: {}", e);
            e.into()
        })
    }
}
