#![allow(dead_code)]

use kudos_store::config::{Config, Environment, HashingConfig};
use kudos_store::data::campaign::{create_campaign, NewCampaign};
use kudos_store::data::credential::{register_user, NewUser};
use kudos_store::entity::{campaign, user};
use kudos_store::utils::schema::create_tables;
use kudos_store::Store;

pub fn config() -> Config {
    Config {
        db_url: "sqlite::memory:".into(),
        environment: Environment::Development,
        hashing: HashingConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        },
    }
}

/// Fresh in-memory database with the full schema.
pub async fn store() -> Store {
    let config = config();
    let store = Store::connect(&config).await.unwrap();
    create_tables(&store.db, config.environment).await.unwrap();
    store
}

pub fn new_user(email: &str, password: &str) -> NewUser {
    NewUser {
        email: email.into(),
        password: password.into(),
        first_name: "Test".into(),
        last_name: "User".into(),
        ..Default::default()
    }
}

pub async fn user(store: &Store, email: &str) -> user::Model {
    register_user(store, new_user(email, "pw1")).await.unwrap()
}

pub async fn campaign(store: &Store, owner: &user::Model) -> campaign::Model {
    create_campaign(
        &store.db,
        owner,
        NewCampaign {
            goal: Some(500),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}
