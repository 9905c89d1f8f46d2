use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, ModelTrait, QueryOrder};

use crate::data::error::Error;
use crate::entity::{campaign, comment, user};
use crate::utils::db::StandardizeError;

#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub user_id: i32,
    pub comment: Option<String>,
    /// Marks the comment as accompanying a kudos.
    pub kudos: bool,
    /// Publish straight away instead of keeping a draft.
    pub posted_at: Option<NaiveDateTime>,
}

impl campaign::Model {
    pub async fn add_comment<C>(
        &self,
        db: &C,
        new_comment: NewComment,
    ) -> Result<comment::Model, Error>
    where
        C: ConnectionTrait,
    {
        let comment = comment::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(new_comment.user_id),
            comment: ActiveValue::Set(new_comment.comment),
            kudos: ActiveValue::Set(new_comment.kudos),
            created_at: ActiveValue::NotSet,
            posted_at: ActiveValue::Set(new_comment.posted_at),
            campaign_id: ActiveValue::Set(self.id),
        }
        .insert(db)
        .await
        .warn_err()?;

        tracing::debug!(
            "user {} commented on campaign {}",
            new_comment.user_id,
            self.id
        );
        Ok(comment)
    }

    /// Drafts included, oldest first.
    pub async fn comments<C>(&self, db: &C) -> Result<Vec<comment::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(comment::Entity)
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
            .warn_err()
    }
}

impl comment::Model {
    pub fn is_posted(&self) -> bool {
        self.posted_at.is_some()
    }

    /// Publishes a draft. A comment can only be posted once.
    pub async fn post<C>(self, db: &C) -> Result<comment::Model, Error>
    where
        C: ConnectionTrait,
    {
        if self.is_posted() {
            return Err(Error::Conflict(format!(
                "comment {} is already posted",
                self.id
            )));
        }

        let mut comment: comment::ActiveModel = self.into();
        comment.posted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        comment.update(db).await.warn_err()
    }
}

impl user::Model {
    pub async fn comments<C>(&self, db: &C) -> Result<Vec<comment::Model>, Error>
    where
        C: ConnectionTrait,
    {
        self.find_related(comment::Entity)
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
            .warn_err()
    }
}
