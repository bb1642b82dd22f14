//! Who is signed in, and where the bearer token lives between runs.
//!
//! A [`SessionContext`] is created once at start-up and passed by reference
//! to the screens that need the current user.

use std::fmt;
use std::io;
use std::sync::Mutex;

use crate::model::{User, UserPatch};

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any.
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, token: &str) -> io::Result<()>;
    /// Remove the token. Clearing an empty store is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// In-process token store, used in tests and for throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.token.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.token.lock().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.token.lock().map_err(poisoned)? = None;
        Ok(())
    }
}

fn poisoned<T>(_: T) -> io::Error {
    io::Error::other("token store lock poisoned")
}

/// The current session: a token and, once the profile is known, the user.
#[derive(Clone, Default)]
pub struct SessionContext {
    token: Option<String>,
    user: Option<User>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user", &self.user)
            .finish()
    }
}

impl SessionContext {
    /// An anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up the token left by a previous run. The user stays unknown
    /// until the profile has been fetched.
    pub fn restore(store: &dyn TokenStore) -> io::Result<Self> {
        let token = store.load()?;
        tracing::debug!(has_token = token.is_some(), "restored session");
        Ok(Self { token, user: None })
    }

    pub fn sign_in(
        &mut self,
        store: &dyn TokenStore,
        token: String,
        user: Option<User>,
    ) -> io::Result<()> {
        store.save(&token)?;
        self.token = Some(token);
        self.user = user;
        Ok(())
    }

    /// Forget the token and the user, both in memory and in the store.
    pub fn sign_out(&mut self, store: &dyn TokenStore) -> io::Result<()> {
        self.token = None;
        self.user = None;
        store.clear()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Merge a partial update into the signed-in user. No-op when anonymous.
    pub fn update_user(&mut self, patch: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            user.apply(patch);
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}
