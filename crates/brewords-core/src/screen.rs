//! Loading a topic and preparing a game screen for it.
//!
//! Each loader fetches the category list and the game content concurrently.
//! Failures raise an error notification and come back as [`LoadError`]; the
//! caller then routes to [`Route::Topics`]. An empty content list is not a
//! failure and yields [`TopicScreen::Empty`].

use crate::error::LoadError;
use crate::games::{FlashcardEngine, GuessWordEngine, UnscrambleEngine};
use crate::model::{Category, GameKind};
use crate::traits::{DataSource, Notifier};

/// Where the presentation layer should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The list of all topics.
    Topics,
    /// One topic and its games.
    Topic(String),
    /// A game within a topic.
    Game { category_id: String, game: GameKind },
}

impl Route {
    /// Where a failed load sends the user.
    pub fn after_load_error(_: &LoadError) -> Self {
        Route::Topics
    }
}

/// A prepared game screen.
#[derive(Debug)]
pub enum TopicScreen<E> {
    Ready { category: Category, engine: E },
    /// The category exists but has nothing to play.
    Empty { category: Category },
}

impl<E> TopicScreen<E> {
    pub fn category(&self) -> &Category {
        match self {
            TopicScreen::Ready { category, .. } | TopicScreen::Empty { category } => category,
        }
    }
}

/// One entry of the per-topic game menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    pub kind: GameKind,
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

/// The games offered for a topic, in menu order.
pub fn game_catalogue(category_id: &str) -> Vec<GameEntry> {
    GameKind::ALL
        .iter()
        .map(|&kind| GameEntry {
            kind,
            title: kind.title(),
            description: kind.description(),
            route: Route::Game {
                category_id: category_id.to_string(),
                game: kind,
            },
        })
        .collect()
}

/// Look up one approved category.
pub async fn load_topic(
    source: &dyn DataSource,
    category_id: &str,
) -> Result<Category, LoadError> {
    let categories = source.fetch_categories().await?;
    find_category(categories, category_id)
}

fn find_category(categories: Vec<Category>, category_id: &str) -> Result<Category, LoadError> {
    categories
        .into_iter()
        .find(|c| c.id == category_id)
        .ok_or_else(|| LoadError::CategoryNotFound(category_id.to_string()))
}

pub async fn load_flashcards(
    source: &dyn DataSource,
    category_id: &str,
    notifier: &dyn Notifier,
) -> Result<TopicScreen<FlashcardEngine>, LoadError> {
    let loaded = async {
        let (categories, cards) = futures::try_join!(
            source.fetch_categories(),
            source.fetch_flash_cards(category_id)
        )?;
        Ok::<_, LoadError>((find_category(categories, category_id)?, cards))
    }
    .await;
    finish(loaded, notifier, "flash cards", FlashcardEngine::new)
}

pub async fn load_guess_word(
    source: &dyn DataSource,
    category_id: &str,
    notifier: &dyn Notifier,
) -> Result<TopicScreen<GuessWordEngine>, LoadError> {
    let loaded = async {
        let (categories, questions) = futures::try_join!(
            source.fetch_categories(),
            source.fetch_guess_questions(category_id)
        )?;
        Ok::<_, LoadError>((find_category(categories, category_id)?, questions))
    }
    .await;
    finish(loaded, notifier, "questions", GuessWordEngine::new)
}

pub async fn load_unscramble(
    source: &dyn DataSource,
    category_id: &str,
    notifier: &dyn Notifier,
) -> Result<TopicScreen<UnscrambleEngine>, LoadError> {
    let loaded = async {
        let (categories, questions) = futures::try_join!(
            source.fetch_categories(),
            source.fetch_unscramble_questions(category_id)
        )?;
        Ok::<_, LoadError>((find_category(categories, category_id)?, questions))
    }
    .await;
    finish(loaded, notifier, "sentences", UnscrambleEngine::new)
}

fn finish<T, E>(
    loaded: Result<(Category, Vec<T>), LoadError>,
    notifier: &dyn Notifier,
    what: &str,
    build: impl FnOnce(Vec<T>) -> E,
) -> Result<TopicScreen<E>, LoadError> {
    match loaded {
        Ok((category, items)) if items.is_empty() => {
            tracing::info!(category = %category.id, "no {what} available");
            notifier.error(&format!("No {what} available for {}", category.name));
            Ok(TopicScreen::Empty { category })
        }
        Ok((category, items)) => {
            tracing::debug!(category = %category.id, count = items.len(), "loaded {what}");
            Ok(TopicScreen::Ready {
                category,
                engine: build(items),
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load {what}");
            notifier.error(&format!("Failed to load {what}: {e}"));
            Err(e)
        }
    }
}
