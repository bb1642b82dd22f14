//! Core trait definitions for content sources and the notification surface.
//!
//! The data-source trait is implemented by `brewords-client` (REST backend
//! and offline content packs) and by [`crate::sample::SampleSource`].

use async_trait::async_trait;

use crate::error::DataSourceError;
use crate::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion};
use crate::vocabulary::VocabularyWord;

// ---------------------------------------------------------------------------
// Data source trait
// ---------------------------------------------------------------------------

/// Where topics and game content come from.
///
/// An empty list is a valid answer meaning "nothing available", not an
/// error.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable source name (e.g. "api", "pack").
    fn name(&self) -> &str;

    /// All approved categories, in display order.
    async fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError>;

    /// Flash cards for one category.
    async fn fetch_flash_cards(&self, category_id: &str)
        -> Result<Vec<FlashCard>, DataSourceError>;

    /// Guess-the-word questions for one category.
    async fn fetch_guess_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<GuessQuestion>, DataSourceError>;

    /// Unscramble puzzles for one category.
    async fn fetch_unscramble_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<UnscrambleQuestion>, DataSourceError>;

    /// The learner's personal vocabulary.
    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyWord>, DataSourceError>;
}

// ---------------------------------------------------------------------------
// Notification surface
// ---------------------------------------------------------------------------

/// Transient user-facing messages (toasts).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that drops every message.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn success(&self, _: &str) {}
    fn error(&self, _: &str) {}
}

/// Notifier that forwards messages to `tracing`.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
