//! The learner's personal word list and its search.

use serde::{Deserialize, Serialize};

/// One entry in the vocabulary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    pub id: u32,
    pub english: String,
    pub translation: String,
    pub topic: String,
    #[serde(default)]
    pub learned: bool,
}

/// Words whose english text, translation or topic contains `term`,
/// ignoring case. A blank term matches everything.
pub fn filter_words<'a>(words: &'a [VocabularyWord], term: &str) -> Vec<&'a VocabularyWord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return words.iter().collect();
    }
    words
        .iter()
        .filter(|w| {
            w.english.to_lowercase().contains(&needle)
                || w.translation.to_lowercase().contains(&needle)
                || w.topic.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Counts shown above the word table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    pub total: usize,
    pub learned: usize,
    pub learning: usize,
}

impl VocabularyStats {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a VocabularyWord>) -> Self {
        words.into_iter().fold(Self::default(), |mut stats, w| {
            stats.total += 1;
            if w.learned {
                stats.learned += 1;
            } else {
                stats.learning += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: u32, english: &str, translation: &str, topic: &str, learned: bool) -> VocabularyWord {
        VocabularyWord {
            id,
            english: english.into(),
            translation: translation.into(),
            topic: topic.into(),
            learned,
        }
    }

    fn words() -> Vec<VocabularyWord> {
        vec![
            word(1, "Hello", "Привіт", "Вітання", true),
            word(2, "Cat", "Кіт", "Тварини", true),
            word(3, "Car", "Машина", "Транспорт", false),
        ]
    }

    #[test]
    fn blank_term_matches_all() {
        let words = words();
        assert_eq!(filter_words(&words, "").len(), 3);
        assert_eq!(filter_words(&words, "   ").len(), 3);
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let words = words();
        let ids = |term| filter_words(&words, term).iter().map(|w| w.id).collect::<Vec<_>>();
        assert_eq!(ids("ca"), vec![2, 3]);
        assert_eq!(ids("МАШ"), vec![3]);
        assert_eq!(ids("тварини"), vec![2]);
        assert!(ids("zebra").is_empty());
    }

    #[test]
    fn stats_split_learned_and_learning() {
        let stats = VocabularyStats::from_words(&words());
        assert_eq!(
            stats,
            VocabularyStats {
                total: 3,
                learned: 2,
                learning: 1
            }
        );
    }
}
