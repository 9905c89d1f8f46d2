use dotenv::dotenv;
use kudos_store::config::{Config, Environment};
use kudos_store::utils::schema::create_tables;
use kudos_store::utils::seed::seed;
use kudos_store::Store;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry().with(fmt::layer()).init();
    let config = Config::from_env().expect("invalid configuration");

    if config.environment != Environment::Development {
        tracing::error!("bootstrap recreates every table; set APP_ENV=development to run it");
        std::process::exit(1);
    }

    let store = Store::connect(&config)
        .await
        .expect("database connect failed");

    create_tables(&store.db, config.environment)
        .await
        .expect("failed to create tables");
    seed(&store).await.expect("failed to seed demo data");

    tracing::info!("Bootstrap finished.");
}
