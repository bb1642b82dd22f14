//! Client error types.

use std::io;

use thiserror::Error;

use brewords_core::error::{DataSourceError, SettingsError};

/// Errors from account operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend call failed.
    #[error(transparent)]
    Source(#[from] DataSourceError),

    /// A form failed client-side checks; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// A settings value failed client-side checks; nothing was sent.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The session token could not be read or written.
    #[error("token storage failed: {0}")]
    TokenStore(#[from] io::Error),
}

impl ClientError {
    /// Returns `true` if the failure means the session is no longer valid.
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Source(e) if e.is_auth())
    }
}
