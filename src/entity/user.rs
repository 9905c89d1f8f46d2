use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::ConnectionTrait;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub email: String,
    /// PHC-formatted Argon2 hash.
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub salt: String,
    pub first_name: String,
    pub last_name: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub img: Option<String>,
    pub created_at: NaiveDateTime,
    pub approved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::campaign::Entity")]
    Campaign,
    #[sea_orm(has_many = "super::kudos::Entity")]
    Kudos,
    #[sea_orm(has_many = "super::supporter::Entity")]
    Supporter,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
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
            if self.created_at.is_not_set() {
                self.created_at = Set(Utc::now().naive_utc());
            }
            if self.approved.is_not_set() {
                self.approved = Set(false);
            }
        }
        Ok(self)
    }
}
