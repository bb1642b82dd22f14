//! The `brewords avatar` command.

use anyhow::Result;

use brewords_client::auth::restore_session;
use brewords_core::model::UserPatch;

use super::{Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, set: Option<String>) -> Result<()> {
    let ctx = Context::load(opts)?;
    let mut session = restore_session(&ctx.client, &ctx.store).await?;
    if !session.is_signed_in() {
        anyhow::bail!("not signed in; run `brewords login` first");
    }

    let Some(url) = set else {
        let avatars = ctx.client.avatars().await?;
        if avatars.is_empty() {
            println!("No avatars available.");
        }
        let current = session.user().and_then(|u| u.avatar.as_deref());
        for (i, avatar) in avatars.iter().enumerate() {
            let marker = if current == Some(avatar.as_str()) { "*" } else { " " };
            println!("{marker} {}) {avatar}", i + 1);
        }
        return Ok(());
    };

    ctx.client.update_avatar(&url).await?;
    session.update_user(UserPatch {
        avatar: Some(url.clone()),
        ..Default::default()
    });
    match session.user() {
        Some(user) => println!("Avatar updated for {}: {url}", user.name),
        None => println!("Avatar updated: {url}"),
    }
    Ok(())
}
