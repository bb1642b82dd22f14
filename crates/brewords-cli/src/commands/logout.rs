//! The `brewords logout` command.

use anyhow::Result;

use brewords_client::auth::sign_out;
use brewords_core::session::SessionContext;

use super::{Context, GlobalOpts};

pub fn execute(opts: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(opts)?;
    let mut session = SessionContext::restore(&ctx.store)?;
    let was_signed_in = session.is_signed_in();
    sign_out(&ctx.client, &ctx.store, &mut session)?;

    if was_signed_in {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}
