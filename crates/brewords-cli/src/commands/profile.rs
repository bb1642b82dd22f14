//! The `brewords profile` command.

use anyhow::Result;
use comfy_table::Table;

use brewords_client::auth::restore_session;
use brewords_core::sample;

use super::{Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(opts)?;
    let session = restore_session(&ctx.client, &ctx.store).await?;

    let Some(user) = session.user() else {
        if session.is_signed_in() {
            anyhow::bail!("could not load your profile; check the backend and try again");
        }
        anyhow::bail!("not signed in; run `brewords login` first");
    };

    println!("[{}] {}", user.initial(), user.name);
    println!("Email:  {}", user.email);
    if let Some(avatar) = &user.avatar {
        println!("Avatar: {avatar}");
    }
    println!();

    // Progress has no backend endpoint yet.
    let mut table = Table::new();
    table.set_header(vec!["Topic", "Words", "Words %", "Sentences", "Sentences %"]);
    for stat in sample::category_stats() {
        table.add_row(vec![
            stat.name.clone(),
            format!("{}/{}", stat.words_learned, stat.total_words),
            format!("{}%", stat.words_progress()),
            format!("{}/{}", stat.sentences_correct, stat.total_sentences),
            format!("{}%", stat.sentences_progress()),
        ]);
    }
    println!("{table}");

    Ok(())
}
