//! The `brewords register` command.

use anyhow::Result;

use brewords_client::auth::RegisterForm;

use super::{Context, GlobalOpts};

pub async fn execute(
    opts: &GlobalOpts,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let form = RegisterForm {
        name,
        email,
        password,
        confirm_password,
    };
    // Check the form before touching config or the network.
    form.validate()?;

    let ctx = Context::load(opts)?;
    ctx.client.register(&form).await?;

    println!("Registered {}. Now sign in with `brewords login`.", form.email);
    Ok(())
}
