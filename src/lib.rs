use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::data::error::Error;
use crate::utils::encryption::Hasher;

pub mod config;
pub mod data;
pub mod entity;
pub mod utils;

/// Storage context handed to every operation that touches the database.
#[derive(Clone)]
pub struct Store {
    pub db: DatabaseConnection,
    pub hasher: Hasher,
}

impl Store {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        Ok(Store {
            db: utils::db::connect(&config.db_url).await?,
            hasher: Hasher::new(&config.hashing)?,
        })
    }
}
