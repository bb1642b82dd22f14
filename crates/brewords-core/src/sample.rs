//! Built-in sample content.
//!
//! The backend has no endpoints for guess-the-word, unscramble, vocabulary
//! or profile statistics yet, so these lists stand in for them. The same
//! questions are served for every category.

use async_trait::async_trait;

use crate::error::DataSourceError;
use crate::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion};
use crate::stats::CategoryStat;
use crate::traits::DataSource;
use crate::vocabulary::VocabularyWord;

const GUESS: [(&str, &str, [&str; 4]); 5] = [
    ("Hello", "Привіт", ["Привіт", "До побачення", "Дякую", "Будь ласка"]),
    ("Cat", "Кіт", ["Собака", "Кіт", "Миша", "Птах"]),
    ("Water", "Вода", ["Молоко", "Сік", "Вода", "Чай"]),
    ("House", "Дім", ["Школа", "Дім", "Магазин", "Парк"]),
    ("Book", "Книга", ["Зошит", "Ручка", "Книга", "Олівець"]),
];

const UNSCRAMBLE: [(&str, &str, &str); 5] = [
    ("Я люблю читати книги", "I love reading books", "books I reading love"),
    (
        "Кіт спить на столі",
        "The cat sleeps on the table",
        "table cat the sleeps The on",
    ),
    (
        "Вона п'є воду щодня",
        "She drinks water every day",
        "every She water day drinks",
    ),
    ("Ми йдемо в школу", "We go to school", "school to We go"),
    (
        "Моя сестра грає на піаніно",
        "My sister plays the piano",
        "piano plays My the sister",
    ),
];

const VOCABULARY: [(&str, &str, &str, bool); 8] = [
    ("Hello", "Привіт", "Вітання", true),
    ("Goodbye", "До побачення", "Вітання", true),
    ("Thank you", "Дякую", "Ввічливість", false),
    ("Please", "Будь ласка", "Ввічливість", false),
    ("Cat", "Кіт", "Тварини", true),
    ("Dog", "Собака", "Тварини", true),
    ("House", "Дім", "Будинки", false),
    ("Car", "Машина", "Транспорт", false),
];

// (id, name, words learned, total words, sentences correct, total sentences)
const STATS: [(&str, &str, u32, u32, u32, u32); 4] = [
    ("1", "Work", 45, 60, 32, 40),
    ("2", "Food", 28, 50, 15, 25),
    ("3", "Animals", 38, 45, 22, 30),
    ("4", "Travel", 12, 35, 8, 20),
];

fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

pub fn guess_questions() -> Vec<GuessQuestion> {
    GUESS
        .iter()
        .enumerate()
        .filter_map(|(i, (prompt, correct, options))| {
            GuessQuestion::new(
                (i + 1).to_string(),
                *prompt,
                *correct,
                options.iter().map(|o| o.to_string()).collect(),
            )
            .ok()
        })
        .collect()
}

pub fn unscramble_questions() -> Vec<UnscrambleQuestion> {
    UNSCRAMBLE
        .iter()
        .enumerate()
        .filter_map(|(i, (prompt, answer, bank))| {
            UnscrambleQuestion::new((i + 1).to_string(), *prompt, words(answer), words(bank)).ok()
        })
        .collect()
}

/// Flash cards built from the guess-the-word prompts.
pub fn flash_cards() -> Vec<FlashCard> {
    GUESS
        .iter()
        .map(|(front, back, _)| FlashCard::new(*front, *back))
        .collect()
}

pub fn vocabulary() -> Vec<VocabularyWord> {
    VOCABULARY
        .iter()
        .zip(1..)
        .map(|((english, translation, topic, learned), id)| VocabularyWord {
            id,
            english: english.to_string(),
            translation: translation.to_string(),
            topic: topic.to_string(),
            learned: *learned,
        })
        .collect()
}

pub fn category_stats() -> Vec<CategoryStat> {
    STATS
        .iter()
        .map(|(id, name, wl, tw, sc, ts)| CategoryStat {
            id: id.to_string(),
            name: name.to_string(),
            words_learned: *wl,
            total_words: *tw,
            sentences_correct: *sc,
            total_sentences: *ts,
        })
        .collect()
}

pub fn categories() -> Vec<Category> {
    STATS
        .iter()
        .map(|(id, name, _, total_words, _, total_sentences)| Category {
            id: id.to_string(),
            name: name.to_string(),
            is_approved: true,
            word_count: *total_words,
            sentence_count: *total_sentences,
            created_date: None,
            image_url: None,
        })
        .collect()
}

/// Data source that serves the built-in sample content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    fn known(category_id: &str) -> Result<(), DataSourceError> {
        if STATS.iter().any(|(id, ..)| *id == category_id) {
            Ok(())
        } else {
            Err(DataSourceError::NotFound(format!("category {category_id}")))
        }
    }
}

#[async_trait]
impl DataSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        Ok(categories())
    }

    async fn fetch_flash_cards(
        &self,
        category_id: &str,
    ) -> Result<Vec<FlashCard>, DataSourceError> {
        Self::known(category_id)?;
        Ok(flash_cards())
    }

    async fn fetch_guess_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<GuessQuestion>, DataSourceError> {
        Self::known(category_id)?;
        Ok(guess_questions())
    }

    async fn fetch_unscramble_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<UnscrambleQuestion>, DataSourceError> {
        Self::known(category_id)?;
        Ok(unscramble_questions())
    }

    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyWord>, DataSourceError> {
        Ok(vocabulary())
    }
}
