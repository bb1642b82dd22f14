//! The `brewords settings` commands.

use anyhow::{Context as _, Result};
use clap::Subcommand;

use brewords_client::auth::restore_session;
use brewords_client::config::{config_path, save_languages};
use brewords_core::session::SessionContext;
use brewords_core::settings::{
    normalize_phone, parse_birthdate, Language, LanguagePair, PasswordChange, ProfileEdit,
};

use super::{Context, GlobalOpts};

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the language pair and the languages on offer
    Show,

    /// Change the native or learning language
    Languages {
        /// Language you translate into (uk, en, ru, pl, de)
        #[arg(long)]
        native: Option<Language>,

        /// Language you are learning
        #[arg(long)]
        learning: Option<Language>,
    },

    /// Change your password
    Password {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        #[arg(long)]
        confirm: String,
    },

    /// Change your display name or email
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Set your phone number
    Phone { number: String },

    /// Set your birthdate (YYYY-MM-DD)
    Birthdate { date: String },
}

pub async fn execute(opts: &GlobalOpts, action: SettingsCommand) -> Result<()> {
    match action {
        SettingsCommand::Show => show(opts),
        SettingsCommand::Languages { native, learning } => languages(opts, native, learning),
        SettingsCommand::Password {
            current,
            new,
            confirm,
        } => password(current, new, confirm),
        SettingsCommand::Profile { name, email } => profile(opts, name, email).await,
        SettingsCommand::Phone { number } => {
            let phone = normalize_phone(&number)?;
            let (ctx, _) = signed_in(opts).await?;
            ctx.client.update_phone(&phone).await?;
            println!("Phone number saved: {phone}");
            Ok(())
        }
        SettingsCommand::Birthdate { date } => {
            let birthdate = parse_birthdate(&date, chrono::Utc::now().date_naive())?;
            let (ctx, _) = signed_in(opts).await?;
            ctx.client.update_birthdate(birthdate).await?;
            println!("Birthdate saved: {birthdate}");
            Ok(())
        }
    }
}

fn menu(languages: &[Language]) -> String {
    languages
        .iter()
        .map(|l| format!("{} ({})", l.code(), l.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn show(opts: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(opts)?;
    let pair = ctx.config.languages;
    println!("Learning: {} ({})", pair.learning.name(), pair.learning);
    println!("Native:   {} ({})", pair.native.name(), pair.native);
    println!();
    println!("Native languages:   {}", menu(&Language::NATIVE));
    println!("Learning languages: {}", menu(&Language::LEARNING));
    Ok(())
}

fn languages(
    opts: &GlobalOpts,
    native: Option<Language>,
    learning: Option<Language>,
) -> Result<()> {
    if native.is_none() && learning.is_none() {
        anyhow::bail!("nothing to change; pass --native and/or --learning");
    }
    let ctx = Context::load(opts)?;
    let current = ctx.config.languages;
    let pair = LanguagePair::new(
        native.unwrap_or(current.native),
        learning.unwrap_or(current.learning),
    )?;

    let path = config_path(opts.config.as_deref())?;
    save_languages(&path, pair)
        .with_context(|| format!("could not save settings to {}", path.display()))?;
    println!("Languages saved: {pair}");
    Ok(())
}

fn password(current: String, new_password: String, confirm: String) -> Result<()> {
    PasswordChange {
        current,
        new_password,
        confirm,
    }
    .validate()?;
    anyhow::bail!("the backend does not support changing passwords yet")
}

async fn profile(opts: &GlobalOpts, name: Option<String>, email: Option<String>) -> Result<()> {
    if name.is_none() && email.is_none() {
        anyhow::bail!("nothing to change; pass --name and/or --email");
    }
    let (ctx, mut session) = signed_in(opts).await?;
    let user = session
        .user()
        .context("could not load your profile; try again later")?;
    let edit = ProfileEdit::merged(user, name, email)?;

    ctx.client.update_profile(&edit).await?;
    session.update_user(edit.patch());
    println!("Profile saved: {} <{}>", edit.name, edit.email);
    Ok(())
}

async fn signed_in(opts: &GlobalOpts) -> Result<(Context, SessionContext)> {
    let ctx = Context::load(opts)?;
    let session = restore_session(&ctx.client, &ctx.store).await?;
    if !session.is_signed_in() {
        anyhow::bail!("not signed in; run `brewords login` first");
    }
    Ok((ctx, session))
}
