//! Error types shared across brewords.
//!
//! `DataSourceError` is defined here rather than in `brewords-client` so the
//! screen loaders can classify failures (auth vs. transport) without string
//! matching, whatever backend produced them.

use thiserror::Error;

/// Errors that can occur when fetching content from a data source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataSourceError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The session token is missing, expired, or rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl DataSourceError {
    /// Returns `true` if the failure means the session is no longer valid.
    pub fn is_auth(&self) -> bool {
        matches!(self, DataSourceError::Auth(_))
    }
}

/// Failure to prepare a topic screen.
///
/// Every variant is surfaced as a notification and sends the user back to
/// the topic list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The category id is not among the approved categories.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// The data source failed.
    #[error(transparent)]
    Source(#[from] DataSourceError),
}

/// An intent issued in a state that forbids it.
///
/// Engines leave their state untouched when they return one of these.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidTransition {
    /// The engine has no items to operate on.
    #[error("nothing to play")]
    Empty,

    /// The answer for the current item has already been revealed.
    #[error("answer already revealed")]
    Revealed,

    /// The game is over; only a reset is accepted.
    #[error("game is complete")]
    Complete,

    /// Confirm was requested without a selected answer.
    #[error("no answer selected")]
    NoSelection,

    /// The selected answer is not one of the offered options.
    #[error("option is not offered for this question")]
    UnknownOption,

    /// A position outside the current list was addressed.
    #[error("position {index} is out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// Check was requested before every word was placed.
    #[error("answer has {placed} of {expected} words")]
    IncompleteAnswer { placed: usize, expected: usize },
}

/// A content record that violates its structural invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The correct answer must appear exactly once among the options.
    #[error("question {id}: correct answer appears {count} times among the options")]
    CorrectAnswerCount { id: String, count: usize },

    /// The word bank must hold exactly the words of the answer.
    #[error("question {id}: shuffled words are not a permutation of the answer")]
    NotAPermutation { id: String },

    /// A puzzle without words cannot be played.
    #[error("question {id}: answer is empty")]
    EmptyAnswer { id: String },
}

/// Settings input rejected before anything is saved or sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{0} is not offered as a native language")]
    NotANativeLanguage(String),

    #[error("{0} is not offered as a learning language")]
    NotALearningLanguage(String),

    /// Native and learning language are the same.
    #[error("native and learning language must differ")]
    SameLanguage,

    #[error("{0} is required")]
    Required(&'static str),

    #[error("new password and confirmation do not match")]
    PasswordMismatch,

    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// Not a `YYYY-MM-DD` date, or a date in the future.
    #[error("invalid birthdate: {0}")]
    InvalidBirthdate(String),
}
