use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::ConnectionTrait;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub video: Option<String>,
    pub deadline: NaiveDateTime,
    /// Whole units, no currency attached.
    pub goal: Option<i32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub approved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::kudos::Entity")]
    Kudos,
    #[sea_orm(has_many = "super::supporter::Entity")]
    Supporter,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::kudos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kudos.def()
    }
}

impl Related<super::supporter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supporter.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let now = Utc::now().naive_utc();
            if self.created_at.is_not_set() {
                self.created_at = Set(now);
            }
            // An unset deadline falls on the creation time.
            if self.deadline.is_not_set() {
                self.deadline = Set(now);
            }
            if self.approved.is_not_set() {
                self.approved = Set(false);
            }
        }
        Ok(self)
    }
}
