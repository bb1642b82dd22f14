//! End-of-game rating bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary band for a finished guess-the-word or unscramble game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Perfect,
    VeryGood,
    NotBad,
    NeedsPractice,
}

impl Rating {
    /// Line shown under the final score.
    pub fn message(self) -> &'static str {
        match self {
            Rating::Perfect => "Excellent! Every answer is correct!",
            Rating::VeryGood => "Very good!",
            Rating::NotBad => "Not bad!",
            Rating::NeedsPractice => "Keep practising!",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Perfect => write!(f, "perfect"),
            Rating::VeryGood => write!(f, "very good"),
            Rating::NotBad => write!(f, "not bad"),
            Rating::NeedsPractice => write!(f, "needs practice"),
        }
    }
}

/// Rate `score` out of `total`.
///
/// Bands are inclusive lower bounds checked from the top: all correct, then
/// at least 80%, then at least 60%. Integer cross-multiplication keeps the
/// 80% and 60% boundaries exact.
pub fn rate(score: usize, total: usize) -> Rating {
    if score == total {
        Rating::Perfect
    } else if score * 5 >= total * 4 {
        Rating::VeryGood
    } else if score * 5 >= total * 3 {
        Rating::NotBad
    } else {
        Rating::NeedsPractice
    }
}
