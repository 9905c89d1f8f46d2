use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use validator::Validate;

use crate::data::error::Error;
use crate::entity::user;
use crate::utils::db::StandardizeError;
use crate::utils::encryption::{generate_salt, Hasher};
use crate::Store;

#[derive(Validate, Clone, Default)]
pub struct NewUser {
    #[validate(email, length(max = 64))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1, max = 16))]
    pub first_name: String,
    #[validate(length(min = 1, max = 24))]
    pub last_name: String,
    #[validate(url, length(max = 128))]
    pub linkedin: Option<String>,
    #[validate(url, length(max = 128))]
    pub github: Option<String>,
    #[validate(url, length(max = 128))]
    pub twitter: Option<String>,
    #[validate(length(max = 128))]
    pub img: Option<String>,
}

#[derive(Validate)]
struct PasswordInput<'a> {
    #[validate(length(min = 1))]
    password: &'a str,
}

/// Creates a user with a freshly salted password. An email that is already
/// registered is rejected with [`Error::Conflict`].
pub async fn register_user(store: &Store, new_user: NewUser) -> Result<user::Model, Error> {
    new_user.validate()?;

    if find_user_by_email(&store.db, &new_user.email).await?.is_some() {
        return Err(Error::Conflict(format!(
            "email {} is already registered",
            new_user.email
        )));
    }

    let salt = generate_salt();
    let password = store.hasher.salt_password(&new_user.password, &salt)?;

    let user = user::ActiveModel {
        id: ActiveValue::NotSet,
        email: ActiveValue::Set(new_user.email),
        password: ActiveValue::Set(password),
        salt: ActiveValue::Set(salt),
        first_name: ActiveValue::Set(new_user.first_name),
        last_name: ActiveValue::Set(new_user.last_name),
        linkedin: ActiveValue::Set(new_user.linkedin),
        github: ActiveValue::Set(new_user.github),
        twitter: ActiveValue::Set(new_user.twitter),
        img: ActiveValue::Set(new_user.img),
        created_at: ActiveValue::NotSet,
        approved: ActiveValue::NotSet,
    }
    .insert(&store.db)
    .await
    .warn_err()?;

    tracing::debug!("registered user {}", user.id);
    Ok(user)
}

pub async fn find_user_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>, Error>
where
    C: ConnectionTrait,
{
    user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .warn_err()
}

impl user::Model {
    /// Replaces the stored salt and hash and persists them immediately.
    pub async fn set_password(self, store: &Store, password: &str) -> Result<user::Model, Error> {
        PasswordInput { password }.validate()?;

        let salt = generate_salt();
        let hash = store.hasher.salt_password(password, &salt)?;

        let mut user: user::ActiveModel = self.into();
        user.salt = ActiveValue::Set(salt);
        user.password = ActiveValue::Set(hash);

        let user = user.update(&store.db).await.warn_err()?;
        tracing::debug!("password changed for user {}", user.id);
        Ok(user)
    }

    /// A missing or malformed stored credential is treated as a mismatch.
    pub fn authenticate(&self, hasher: &Hasher, password: &str) -> bool {
        if self.salt.is_empty() || self.password.is_empty() {
            return false;
        }

        hasher.verify(password, &self.salt, &self.password)
    }

    pub async fn approve<C>(self, db: &C) -> Result<user::Model, Error>
    where
        C: ConnectionTrait,
    {
        let mut user: user::ActiveModel = self.into();
        user.approved = ActiveValue::Set(true);
        user.update(db).await.warn_err()
    }
}
