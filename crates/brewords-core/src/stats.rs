//! Per-category learning progress shown on the profile screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub id: String,
    pub name: String,
    pub words_learned: u32,
    pub total_words: u32,
    pub sentences_correct: u32,
    pub total_sentences: u32,
}

impl CategoryStat {
    /// Percentage of words learned, rounded to the nearest integer.
    pub fn words_progress(&self) -> u32 {
        percent(self.words_learned, self.total_words)
    }

    /// Percentage of sentences solved, rounded to the nearest integer.
    pub fn sentences_progress(&self) -> u32 {
        percent(self.sentences_correct, self.total_sentences)
    }
}

fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round half up in integer arithmetic.
    ((u64::from(part) * 200 + u64::from(total)) / (u64::from(total) * 2)) as u32
}
