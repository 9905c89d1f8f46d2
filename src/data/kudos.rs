use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter,
};

use crate::data::error::Error;
use crate::entity::{campaign, kudos, user};
use crate::utils::db::StandardizeError;

impl campaign::Model {
    pub async fn num_kudoses<C>(&self, db: &C) -> Result<u64, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(kudos::Entity).count(db).await.warn_err()
    }

    /// Records `user_id`'s kudos. Returns `false` without touching the store
    /// when there is no user or the user has already given kudos here.
    ///
    /// A concurrent writer that slips past the check is stopped by the
    /// unique index and surfaces as [`Error::Conflict`].
    pub async fn add_kudos<C>(&self, db: &C, user_id: Option<i32>) -> Result<bool, Error>
    where
        C: ConnectionTrait,
    {
        let Some(user_id) = user_id else {
            return Ok(false);
        };

        if self.has_kudosed(db, Some(user_id)).await? {
            return Ok(false);
        }

        kudos::ActiveModel {
            id: ActiveValue::NotSet,
            campaign_id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(db)
        .await
        .debug_err()?;

        tracing::debug!("user {} gave kudos to campaign {}", user_id, self.id);
        Ok(true)
    }

    pub async fn has_kudosed<C>(&self, db: &C, user_id: Option<i32>) -> Result<bool, Error>
    where
        C: ConnectionTrait,
    {
        let Some(user_id) = user_id else {
            return Ok(false);
        };

        let found = self
            .find_related(kudos::Entity)
            .filter(kudos::Column::UserId.eq(user_id))
            .count(db)
            .await
            .warn_err()?;

        Ok(found > 0)
    }

    /// Withdraws `user_id`'s kudos from this campaign only.
    /// [`Error::NotFound`] when there is nothing to withdraw.
    pub async fn remove_kudos<C>(&self, db: &C, user_id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let result = kudos::Entity::delete_many()
            .filter(kudos::Column::CampaignId.eq(self.id))
            .filter(kudos::Column::UserId.eq(user_id))
            .exec(db)
            .await
            .warn_err()?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }

        tracing::debug!("user {} withdrew kudos from campaign {}", user_id, self.id);
        Ok(())
    }
}

impl user::Model {
    pub async fn kudoses<C>(&self, db: &C) -> Result<Vec<kudos::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(kudos::Entity).all(db).await.warn_err()
    }
}
