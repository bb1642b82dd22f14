//! The `brewords login` command.

use anyhow::Result;

use brewords_client::auth::sign_in;
use brewords_core::session::SessionContext;

use super::{Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, email: String, password: String) -> Result<()> {
    let ctx = Context::load(opts)?;
    let mut session = SessionContext::new();
    sign_in(&ctx.client, &ctx.store, &mut session, &email, &password).await?;

    match session.user() {
        Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
        None => println!("Signed in as {email}"),
    }
    Ok(())
}
