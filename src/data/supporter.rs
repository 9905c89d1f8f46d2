use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, ModelTrait};

use crate::data::error::Error;
use crate::entity::{campaign, supporter, user};
use crate::utils::db::StandardizeError;

impl campaign::Model {
    /// Records that `user_id` backs this campaign. Repeat backing is allowed
    /// and produces one row per pledge.
    pub async fn add_supporter<C>(&self, db: &C, user_id: i32) -> Result<supporter::Model, Error>
    where
        C: ConnectionTrait,
    {
        let supporter = supporter::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            campaign_id: ActiveValue::Set(self.id),
        }
        .insert(db)
        .await
        .warn_err()?;

        tracing::debug!("user {} backed campaign {}", user_id, self.id);
        Ok(supporter)
    }

    pub async fn supporters<C>(&self, db: &C) -> Result<Vec<supporter::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(supporter::Entity).all(db).await.warn_err()
    }
}

impl user::Model {
    pub async fn supported<C>(&self, db: &C) -> Result<Vec<supporter::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(supporter::Entity).all(db).await.warn_err()
    }
}
