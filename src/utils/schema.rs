use sea_orm::sea_query::{Index, Table};
use sea_orm::{ConnectionTrait, EntityTrait, Schema};

use crate::config::Environment;
use crate::data::error::Error;
use crate::entity::{campaign, comment, kudos, supporter, user};
use crate::utils::db::StandardizeError;

pub const KUDOS_UNIQUE_INDEX: &str = "idx_kudoses_user_campaign";

/// Drops every table and recreates the schema from the entity definitions.
/// All existing rows are lost.
pub async fn create_tables<C>(db: &C, environment: Environment) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    if environment != Environment::Development {
        tracing::warn!("refusing to recreate tables outside development");
        return Err(Error::DevelopmentOnly);
    }

    // children before parents
    drop_table(db, comment::Entity).await?;
    drop_table(db, supporter::Entity).await?;
    drop_table(db, kudos::Entity).await?;
    drop_table(db, campaign::Entity).await?;
    drop_table(db, user::Entity).await?;

    create_table(db, user::Entity).await?;
    create_table(db, campaign::Entity).await?;
    create_table(db, kudos::Entity).await?;
    create_table(db, supporter::Entity).await?;
    create_table(db, comment::Entity).await?;

    let backend = db.get_database_backend();
    let index = Index::create()
        .name(KUDOS_UNIQUE_INDEX)
        .table(kudos::Entity)
        .col(kudos::Column::UserId)
        .col(kudos::Column::CampaignId)
        .unique()
        .to_owned();
    db.execute(backend.build(&index)).await.warn_err()?;

    tracing::info!("database schema recreated");
    Ok(())
}

async fn drop_table<C, E>(db: &C, entity: E) -> Result<(), Error>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let statement = Table::drop().table(entity).if_exists().to_owned();

    db.execute(backend.build(&statement)).await.warn_err()?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), Error>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statement = schema.create_table_from_entity(entity);
    db.execute(backend.build(&statement)).await.warn_err()?;

    for index in schema.create_index_from_entity(entity) {
        db.execute(backend.build(&index)).await.warn_err()?;
    }
    Ok(())
}
