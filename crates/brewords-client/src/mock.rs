//! Mock data source for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use brewords_core::error::DataSourceError;
use brewords_core::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion};
use brewords_core::sample;
use brewords_core::traits::DataSource;
use brewords_core::vocabulary::VocabularyWord;

/// A data source with canned content, for exercising screens and commands
/// without a backend.
pub struct MockDataSource {
    categories: Vec<Category>,
    flash_cards: Vec<FlashCard>,
    guess: Vec<GuessQuestion>,
    unscramble: Vec<UnscrambleQuestion>,
    vocabulary: Vec<VocabularyWord>,
    /// Returned from every call when set.
    failure: Option<DataSourceError>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Category id of the last content request.
    last_category: Mutex<Option<String>>,
}

impl MockDataSource {
    /// A source serving the built-in sample content.
    pub fn with_samples() -> Self {
        Self {
            categories: sample::categories(),
            flash_cards: sample::flash_cards(),
            guess: sample::guess_questions(),
            unscramble: sample::unscramble_questions(),
            vocabulary: sample::vocabulary(),
            failure: None,
            call_count: AtomicU32::new(0),
            last_category: Mutex::new(None),
        }
    }

    /// A source whose every call fails with `error`.
    pub fn failing(error: DataSourceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::with_samples()
        }
    }

    pub fn with_flash_cards(mut self, cards: Vec<FlashCard>) -> Self {
        self.flash_cards = cards;
        self
    }

    pub fn with_guess_questions(mut self, questions: Vec<GuessQuestion>) -> Self {
        self.guess = questions;
        self
    }

    pub fn with_unscramble_questions(mut self, questions: Vec<UnscrambleQuestion>) -> Self {
        self.unscramble = questions;
        self
    }

    /// Get the number of calls made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the category id of the last content request.
    pub fn last_category(&self) -> Option<String> {
        self.last_category.lock().ok().and_then(|c| c.clone())
    }

    fn record<T: Clone>(
        &self,
        category_id: Option<&str>,
        items: &[T],
    ) -> Result<Vec<T>, DataSourceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let (Some(id), Ok(mut last)) = (category_id, self.last_category.lock()) {
            *last = Some(id.to_string());
        }
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(items.to_vec()),
        }
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        self.record(None, &self.categories)
    }

    async fn fetch_flash_cards(
        &self,
        category_id: &str,
    ) -> Result<Vec<FlashCard>, DataSourceError> {
        self.record(Some(category_id), &self.flash_cards)
    }

    async fn fetch_guess_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<GuessQuestion>, DataSourceError> {
        self.record(Some(category_id), &self.guess)
    }

    async fn fetch_unscramble_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<UnscrambleQuestion>, DataSourceError> {
        self.record(Some(category_id), &self.unscramble)
    }

    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyWord>, DataSourceError> {
        self.record(None, &self.vocabulary)
    }
}
