use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, ModelTrait};
use serde::Serialize;
use validator::Validate;

use crate::data::error::Error;
use crate::entity::{campaign, user};
use crate::utils::db::StandardizeError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// How much of a campaign's run is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "remaining")]
pub enum TimeRemaining {
    #[serde(rename = "completed")]
    Completed,
    /// Deadline is more than zero and at most one day away (`0 < remaining <= 1 day`);
    /// total seconds until the deadline.
    #[serde(rename = "seconds")]
    SecondsRemaining(i64),
    /// More than one day away; whole days until the deadline, rounded down.
    #[serde(rename = "days")]
    DaysRemaining(i64),
}

#[derive(Validate, Debug, Clone, Default)]
pub struct NewCampaign {
    #[validate(url, length(max = 128))]
    pub video: Option<String>,
    /// Falls back to the creation time when absent.
    pub deadline: Option<NaiveDateTime>,
    #[validate(range(min = 0))]
    pub goal: Option<i32>,
    #[validate(length(max = 128))]
    pub tagline: Option<String>,
    #[validate(length(max = 128))]
    pub description: Option<String>,
}

/// Creates `owner`'s campaign. A user owns at most one; a second attempt is
/// rejected by the unique `user_id` column and reported as [`Error::Conflict`].
pub async fn create_campaign<C>(
    db: &C,
    owner: &user::Model,
    new_campaign: NewCampaign,
) -> Result<campaign::Model, Error>
where
    C: ConnectionTrait,
{
    new_campaign.validate()?;

    let deadline = match new_campaign.deadline {
        Some(deadline) => ActiveValue::Set(deadline),
        None => ActiveValue::NotSet,
    };

    let campaign = campaign::ActiveModel {
        id: ActiveValue::NotSet,
        video: ActiveValue::Set(new_campaign.video),
        deadline,
        goal: ActiveValue::Set(new_campaign.goal),
        tagline: ActiveValue::Set(new_campaign.tagline),
        description: ActiveValue::Set(new_campaign.description),
        created_at: ActiveValue::NotSet,
        user_id: ActiveValue::Set(owner.id),
        approved: ActiveValue::NotSet,
    }
    .insert(db)
    .await
    .debug_err()?;

    tracing::debug!("user {} created campaign {}", owner.id, campaign.id);
    Ok(campaign)
}

impl campaign::Model {
    pub fn time_remaining(&self, now: NaiveDateTime) -> TimeRemaining {
        let seconds = (self.deadline - now).num_seconds();

        if seconds <= 0 {
            TimeRemaining::Completed
        } else if seconds <= SECONDS_PER_DAY {
            TimeRemaining::SecondsRemaining(seconds)
        } else {
            TimeRemaining::DaysRemaining(seconds / SECONDS_PER_DAY)
        }
    }

    pub async fn owner<C>(&self, db: &C) -> Result<user::Model, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(user::Entity)
            .one(db)
            .await
            .warn_err()?
            .ok_or(Error::NotFound)
    }

    pub async fn approve<C>(self, db: &C) -> Result<campaign::Model, Error>
    where
        C: ConnectionTrait,
    {
        let mut campaign: campaign::ActiveModel = self.into();
        campaign.approved = ActiveValue::Set(true);
        campaign.update(db).await.warn_err()
    }
}

impl user::Model {
    pub async fn campaign<C>(&self, db: &C) -> Result<Option<campaign::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(campaign::Entity).one(db).await.warn_err()
    }
}
