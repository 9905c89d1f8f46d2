mod common;

use kudos_store::data::credential::{find_user_by_email, register_user};
use kudos_store::data::error::Error;
use rstest::rstest;

#[tokio::test]
async fn authenticates_with_the_registered_password() {
    let store = common::store().await;
    let user = register_user(&store, common::new_user("a@x.com", "pw1"))
        .await
        .unwrap();

    assert!(user.authenticate(&store.hasher, "pw1"));
    assert!(!user.authenticate(&store.hasher, "pw2"));
    assert!(!user.approved);
}

#[rstest]
#[case("correct horse battery staple")]
#[case("pässwörd ünïcode")]
#[case(" ")]
#[tokio::test]
async fn set_password_round_trips(#[case] password: &str) {
    let store = common::store().await;
    let user = common::user(&store, "a@x.com").await;
    let old_salt = user.salt.clone();

    let user = user.set_password(&store, password).await.unwrap();

    assert_ne!(user.salt, old_salt);
    assert!(user.authenticate(&store.hasher, password));
    assert!(!user.authenticate(&store.hasher, "pw1"));
}

#[tokio::test]
async fn set_password_is_persisted() {
    let store = common::store().await;
    let user = common::user(&store, "a@x.com").await;
    user.set_password(&store, "changed").await.unwrap();

    let reloaded = find_user_by_email(&store.db, "a@x.com")
        .await
        .unwrap()
        .unwrap();

    assert!(reloaded.authenticate(&store.hasher, "changed"));
}

#[tokio::test]
async fn empty_password_is_rejected() {
    let store = common::store().await;
    let user = common::user(&store, "a@x.com").await;

    let result = user.set_password(&store, "").await;

    assert!(matches!(result, Err(Error::Validation(_))));
}

#[tokio::test]
async fn missing_credentials_never_authenticate() {
    let store = common::store().await;
    let mut user = common::user(&store, "a@x.com").await;
    user.salt.clear();
    user.password.clear();

    assert!(!user.authenticate(&store.hasher, "pw1"));
    assert!(!user.authenticate(&store.hasher, ""));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let store = common::store().await;
    common::user(&store, "a@x.com").await;

    let result = register_user(&store, common::new_user("a@x.com", "other")).await;

    assert!(matches!(result, Err(Error::Conflict(_))));
}

#[tokio::test]
async fn invalid_user_is_not_persisted() {
    let store = common::store().await;

    let result = register_user(&store, common::new_user("", "pw1")).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(find_user_by_email(&store.db, "").await.unwrap().is_none());
}

#[tokio::test]
async fn approve_sets_the_flag() {
    let store = common::store().await;
    let user = common::user(&store, "a@x.com").await;

    let user = user.approve(&store.db).await.unwrap();

    assert!(user.approved);
}
