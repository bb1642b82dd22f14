//! Sign-in, sign-out and session restore.
//!
//! These glue the [`ApiClient`] to a [`TokenStore`] and a
//! [`SessionContext`]: the client holds the token for requests, the store
//! keeps it between runs, and the session holds the signed-in user.

use brewords_core::error::DataSourceError;
use brewords_core::session::{SessionContext, TokenStore};

use crate::api::ApiClient;
use crate::error::ClientError;

pub use brewords_core::settings::MIN_PASSWORD_LEN;

/// Fields of the registration form.
#[derive(Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

impl RegisterForm {
    /// Client-side checks run before the form is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(ClientError::Validation("email is required".into()));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::Validation("passwords do not match".into()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Log in, persist the token and load the profile into `session`.
///
/// A profile failure other than an auth rejection leaves the user signed
/// in without a known profile.
pub async fn sign_in(
    client: &ApiClient,
    store: &dyn TokenStore,
    session: &mut SessionContext,
    email: &str,
    password: &str,
) -> Result<(), ClientError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "email and password are required".into(),
        ));
    }

    let token = client.login(email, password).await?;
    let user = match client.profile().await {
        Ok(user) => Some(user),
        Err(e) if e.is_auth() => {
            client.logout();
            return Err(e.into());
        }
        Err(e) => {
            tracing::warn!(error = %e, "signed in but could not load profile");
            None
        }
    };
    session.sign_in(store, token, user)?;
    tracing::info!(email, "signed in");
    Ok(())
}

/// Log out locally: clear the client, the store and the session.
pub fn sign_out(
    client: &ApiClient,
    store: &dyn TokenStore,
    session: &mut SessionContext,
) -> Result<(), ClientError> {
    client.logout();
    session.sign_out(store)?;
    Ok(())
}

/// Rebuild the session left by a previous run.
///
/// A stored token the backend rejects is cleared and the session comes back
/// anonymous. If the backend cannot be reached the token is kept but no
/// user is known.
pub async fn restore_session(
    client: &ApiClient,
    store: &dyn TokenStore,
) -> Result<SessionContext, ClientError> {
    let mut session = SessionContext::restore(store)?;
    let Some(token) = session.token().map(str::to_string) else {
        return Ok(session);
    };

    client.set_token(Some(token));
    match client.profile().await {
        Ok(user) => session.set_user(user),
        Err(DataSourceError::Auth(reason)) => {
            tracing::info!(%reason, "stored token rejected, clearing it");
            sign_out(client, store, &mut session)?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load profile");
        }
    }
    Ok(session)
}
