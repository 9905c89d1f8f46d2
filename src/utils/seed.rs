use chrono::{Duration, Utc};

use crate::data::campaign::{create_campaign, NewCampaign};
use crate::data::credential::{register_user, NewUser};
use crate::data::error::Error;
use crate::entity::{campaign, user};
use crate::Store;

pub const DEMO_EMAIL: &str = "demo@kudos.dev";
pub const DEMO_PASSWORD: &str = "python";

/// Inserts one demo user and their campaign. Not idempotent: running it twice
/// without recreating the tables fails on the already registered email.
pub async fn seed(store: &Store) -> Result<(user::Model, campaign::Model), Error> {
    let user = register_user(
        store,
        NewUser {
            email: DEMO_EMAIL.into(),
            password: DEMO_PASSWORD.into(),
            first_name: "Demo".into(),
            last_name: "Founder".into(),
            linkedin: Some("https://www.linkedin.com/in/demo-founder/".into()),
            github: Some("https://github.com/demo-founder".into()),
            twitter: Some("https://twitter.com/demo_founder".into()),
            img: None,
        },
    )
    .await?;

    let campaign = create_campaign(
        &store.db,
        &user,
        NewCampaign {
            video: Some("https://www.youtube.com/watch?v=0byNU3RHhr8".into()),
            deadline: Some(Utc::now().naive_utc() + Duration::days(30)),
            goal: Some(500),
            tagline: Some("I want to learn how to program".into()),
            description: Some("Twelve weeks of full-time study, one shipped project.".into()),
        },
    )
    .await?;

    tracing::info!("seeded user {} with campaign {}", user.id, campaign.id);
    Ok((user, campaign))
}
