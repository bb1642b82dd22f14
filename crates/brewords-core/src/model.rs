//! Core data model types for brewords.
//!
//! Cards and questions are immutable once loaded; engines own them for the
//! length of one game session.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A two-sided vocabulary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCard {
    /// The word or phrase being learned.
    pub front: String,
    /// Its translation.
    pub back: String,
}

impl FlashCard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A multiple-choice translation question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessQuestion {
    pub id: String,
    /// The word shown to the player.
    pub prompt: String,
    /// The option that scores a point.
    pub correct_answer: String,
    /// Offered answers, in display order fixed at load time.
    pub options: Vec<String>,
}

impl GuessQuestion {
    /// Build a question, rejecting it unless `correct_answer` is exactly one
    /// of `options`.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, ModelError> {
        let question = Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            options,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let count = self
            .options
            .iter()
            .filter(|o| **o == self.correct_answer)
            .count();
        if count != 1 {
            return Err(ModelError::CorrectAnswerCount {
                id: self.id.clone(),
                count,
            });
        }
        Ok(())
    }

    /// Position of the correct answer among the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

/// A sentence-reordering puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscrambleQuestion {
    pub id: String,
    /// The sentence in the learner's language.
    pub prompt: String,
    /// The tokens of the target sentence, in order.
    pub correct_order: Vec<String>,
    /// The same tokens as offered to the player.
    pub shuffled_words: Vec<String>,
}

impl UnscrambleQuestion {
    /// Build a puzzle from an explicit word bank.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_order: Vec<String>,
        shuffled_words: Vec<String>,
    ) -> Result<Self, ModelError> {
        let question = Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_order,
            shuffled_words,
        };
        question.validate()?;
        Ok(question)
    }

    /// Build a puzzle whose word bank is a random shuffle of the answer.
    ///
    /// The shuffle may come out equal to the answer; see
    /// [`UnscrambleQuestion::is_presolved`].
    pub fn shuffled<R: Rng + ?Sized>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_order: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        let mut shuffled_words = correct_order.clone();
        shuffled_words.shuffle(rng);
        Self::new(id, prompt, correct_order, shuffled_words)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.correct_order.is_empty() {
            return Err(ModelError::EmptyAnswer {
                id: self.id.clone(),
            });
        }
        if word_counts(&self.correct_order) != word_counts(&self.shuffled_words) {
            return Err(ModelError::NotAPermutation {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Whether the word bank already reads as the answer.
    pub fn is_presolved(&self) -> bool {
        self.shuffled_words == self.correct_order
    }
}

fn word_counts(words: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for w in words {
        *counts.entry(w.as_str()).or_insert(0) += 1;
    }
    counts
}

/// A topic grouping vocabulary content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_approved: bool,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub sentence_count: u32,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

/// The three mini-games offered for every topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    Flashcards,
    GuessWord,
    Unscramble,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [
        GameKind::Flashcards,
        GameKind::GuessWord,
        GameKind::Unscramble,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Flashcards => "FlashCards",
            GameKind::GuessWord => "Guess the Word",
            GameKind::Unscramble => "Unscramble Sentence",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameKind::Flashcards => "Learn words with cards that flip over",
            GameKind::GuessWord => "Pick the right translation out of four options",
            GameKind::Unscramble => "Put the words of a sentence in the right order",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Flashcards => write!(f, "flashcards"),
            GameKind::GuessWord => write!(f, "guess-word"),
            GameKind::Unscramble => write!(f, "unscramble"),
        }
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flashcards" | "cards" => Ok(GameKind::Flashcards),
            "guess-word" | "guess" => Ok(GameKind::GuessWord),
            "unscramble" | "sentences" => Ok(GameKind::Unscramble),
            other => Err(format!("unknown game: {other}")),
        }
    }
}

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A partial update to [`User`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
    }

    /// Upper-cased first letter of the name, used when there is no avatar.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}
