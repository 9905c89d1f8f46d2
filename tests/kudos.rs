mod common;

use kudos_store::data::error::Error;
use kudos_store::entity::kudos;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

#[tokio::test]
async fn second_kudos_from_the_same_user_is_ignored() {
    let store = common::store().await;
    let owner = common::user(&store, "a@x.com").await;
    let backer = common::user(&store, "b@x.com").await;
    let campaign = common::campaign(&store, &owner).await;

    assert!(campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap());
    assert!(campaign.has_kudosed(&store.db, Some(backer.id)).await.unwrap());
    assert!(!campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap());

    assert_eq!(campaign.num_kudoses(&store.db).await.unwrap(), 1);
    assert_eq!(kudos::Entity::find().count(&store.db).await.unwrap(), 1);
}

#[tokio::test]
async fn absent_user_is_a_soft_failure() {
    let store = common::store().await;
    let owner = common::user(&store, "a@x.com").await;
    let campaign = common::campaign(&store, &owner).await;

    assert!(!campaign.add_kudos(&store.db, None).await.unwrap());
    assert!(!campaign.has_kudosed(&store.db, None).await.unwrap());
    assert_eq!(campaign.num_kudoses(&store.db).await.unwrap(), 0);
}

#[tokio::test]
async fn add_then_remove_round_trips() {
    let store = common::store().await;
    let owner = common::user(&store, "a@x.com").await;
    let backer = common::user(&store, "b@x.com").await;
    let campaign = common::campaign(&store, &owner).await;

    campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap();
    campaign.remove_kudos(&store.db, backer.id).await.unwrap();

    assert!(!campaign.has_kudosed(&store.db, Some(backer.id)).await.unwrap());
    assert_eq!(campaign.num_kudoses(&store.db).await.unwrap(), 0);

    // and back again
    assert!(campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap());
}

#[tokio::test]
async fn removing_missing_kudos_is_not_found() {
    let store = common::store().await;
    let owner = common::user(&store, "a@x.com").await;
    let backer = common::user(&store, "b@x.com").await;
    let campaign = common::campaign(&store, &owner).await;

    let result = campaign.remove_kudos(&store.db, backer.id).await;
    assert!(matches!(result, Err(Error::NotFound)));

    campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap();
    campaign.remove_kudos(&store.db, backer.id).await.unwrap();

    let result = campaign.remove_kudos(&store.db, backer.id).await;
    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn removal_is_scoped_to_the_campaign() {
    let store = common::store().await;
    let alice = common::user(&store, "a@x.com").await;
    let bob = common::user(&store, "b@x.com").await;
    let backer = common::user(&store, "c@x.com").await;
    let first = common::campaign(&store, &alice).await;
    let second = common::campaign(&store, &bob).await;

    first.add_kudos(&store.db, Some(backer.id)).await.unwrap();
    second.add_kudos(&store.db, Some(backer.id)).await.unwrap();

    second.remove_kudos(&store.db, backer.id).await.unwrap();

    assert!(first.has_kudosed(&store.db, Some(backer.id)).await.unwrap());
    assert!(!second.has_kudosed(&store.db, Some(backer.id)).await.unwrap());
    assert_eq!(backer.kudoses(&store.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn count_tracks_distinct_current_kudoses() {
    let store = common::store().await;
    let owner = common::user(&store, "owner@x.com").await;
    let campaign = common::campaign(&store, &owner).await;

    let mut backers = Vec::new();
    for i in 0..4 {
        backers.push(common::user(&store, &format!("{}@x.com", i)).await);
    }
    for backer in &backers {
        campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap();
        campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap();
    }
    campaign.remove_kudos(&store.db, backers[1].id).await.unwrap();

    assert_eq!(campaign.num_kudoses(&store.db).await.unwrap(), 3);
}

#[tokio::test]
async fn storage_rejects_duplicate_rows() {
    let store = common::store().await;
    let owner = common::user(&store, "a@x.com").await;
    let backer = common::user(&store, "b@x.com").await;
    let campaign = common::campaign(&store, &owner).await;
    campaign.add_kudos(&store.db, Some(backer.id)).await.unwrap();

    // what a racing writer that skipped the check would do
    let result = kudos::ActiveModel {
        id: ActiveValue::NotSet,
        campaign_id: ActiveValue::Set(campaign.id),
        user_id: ActiveValue::Set(backer.id),
    }
    .insert(&store.db)
    .await;

    assert!(matches!(result.map_err(Error::from), Err(Error::Conflict(_))));
}
