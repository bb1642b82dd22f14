//! TOML content pack parser.
//!
//! A content pack bundles categories, their game content and a vocabulary
//! list into one file so brewords can run without a backend.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;

use crate::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion};
use crate::vocabulary::VocabularyWord;

/// Intermediate TOML structure for parsing pack files.
#[derive(Debug, Deserialize)]
struct TomlPackFile {
    pack: TomlPackHeader,
    #[serde(default)]
    categories: Vec<TomlCategory>,
    #[serde(default)]
    vocabulary: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlPackHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: String,
    name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    flashcards: Vec<FlashCard>,
    #[serde(default)]
    guess: Vec<TomlGuess>,
    #[serde(default)]
    unscramble: Vec<TomlUnscramble>,
}

#[derive(Debug, Deserialize)]
struct TomlGuess {
    id: String,
    prompt: String,
    correct: String,
    options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TomlUnscramble {
    id: String,
    prompt: String,
    answer: String,
    #[serde(default)]
    shuffled: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    english: String,
    translation: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    learned: bool,
}

/// A parsed content pack.
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<PackCategory>,
    pub vocabulary: Vec<VocabularyWord>,
}

/// One category with everything its games need.
#[derive(Debug, Clone)]
pub struct PackCategory {
    pub category: Category,
    pub flash_cards: Vec<FlashCard>,
    pub guess: Vec<GuessQuestion>,
    pub unscramble: Vec<UnscrambleQuestion>,
}

impl ContentPack {
    pub fn category(&self, id: &str) -> Option<&PackCategory> {
        self.categories.iter().find(|c| c.category.id == id)
    }
}

/// Parse a content pack file.
pub fn parse_pack(path: &Path) -> Result<ContentPack> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content pack: {}", path.display()))?;

    parse_pack_str(&content, path)
}

/// Parse a TOML string into a `ContentPack`, shuffling unscramble banks
/// that are not given explicitly.
pub fn parse_pack_str(content: &str, source_path: &Path) -> Result<ContentPack> {
    parse_pack_str_with_rng(content, source_path, &mut rand::thread_rng())
}

/// Like [`parse_pack_str`] with a caller-supplied RNG, for reproducible
/// shuffles.
pub fn parse_pack_str_with_rng<R: Rng + ?Sized>(
    content: &str,
    source_path: &Path,
    rng: &mut R,
) -> Result<ContentPack> {
    let parsed: TomlPackFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let categories = parsed
        .categories
        .into_iter()
        .map(|c| {
            let guess = c
                .guess
                .into_iter()
                .map(|g| GuessQuestion::new(g.id, g.prompt, g.correct, g.options))
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("category {}", c.id))?;

            let unscramble = c
                .unscramble
                .into_iter()
                .map(|u| {
                    let answer = split_words(&u.answer);
                    match u.shuffled {
                        Some(bank) => {
                            UnscrambleQuestion::new(u.id, u.prompt, answer, split_words(&bank))
                        }
                        None => UnscrambleQuestion::shuffled(u.id, u.prompt, answer, rng),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("category {}", c.id))?;

            Ok(PackCategory {
                category: Category {
                    id: c.id,
                    name: c.name,
                    is_approved: true,
                    word_count: count(c.flashcards.len()),
                    sentence_count: count(unscramble.len()),
                    created_date: None,
                    image_url: c.image_url,
                },
                flash_cards: c.flashcards,
                guess,
                unscramble,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let vocabulary = parsed
        .vocabulary
        .into_iter()
        .zip(1..)
        .map(|(w, id)| VocabularyWord {
            id,
            english: w.english,
            translation: w.translation,
            topic: w.topic,
            learned: w.learned,
        })
        .collect();

    tracing::debug!(
        pack = %parsed.pack.id,
        categories = categories.len(),
        "parsed content pack"
    );

    Ok(ContentPack {
        id: parsed.pack.id,
        name: parsed.pack.name,
        description: parsed.pack.description,
        categories,
        vocabulary,
    })
}

/// Item counts shown on a category; saturates instead of wrapping.
fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn split_words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(String::from).collect()
}

/// A warning from content pack validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The category ID (if applicable).
    pub category_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a content pack for issues that parse but make poor games.
pub fn validate_pack(pack: &ContentPack) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |warnings: &mut Vec<ValidationWarning>, id: &str, message: String| {
        warnings.push(ValidationWarning {
            category_id: Some(id.to_string()),
            message,
        });
    };

    let mut seen_ids = HashSet::new();
    for c in &pack.categories {
        let id = c.category.id.as_str();
        if !seen_ids.insert(id) {
            warn(&mut warnings, id, format!("duplicate category ID: {id}"));
        }

        if c.flash_cards.is_empty() && c.guess.is_empty() && c.unscramble.is_empty() {
            warn(&mut warnings, id, "category has no content".into());
        }

        for q in &c.guess {
            if q.options.len() != 4 {
                warn(
                    &mut warnings,
                    id,
                    format!(
                        "guess question {} has {} options, expected 4",
                        q.id,
                        q.options.len()
                    ),
                );
            }
            let distinct: HashSet<&str> = q.options.iter().map(String::as_str).collect();
            if distinct.len() != q.options.len() {
                warn(
                    &mut warnings,
                    id,
                    format!("guess question {} repeats an option", q.id),
                );
            }
        }

        for q in &c.unscramble {
            if q.is_presolved() {
                warn(
                    &mut warnings,
                    id,
                    format!("unscramble puzzle {} starts already solved", q.id),
                );
            }
        }
    }

    if pack.categories.is_empty() {
        warnings.push(ValidationWarning {
            category_id: None,
            message: "pack has no categories".into(),
        });
    }

    warnings
}
