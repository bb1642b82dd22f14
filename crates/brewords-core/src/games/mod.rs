//! The three mini-game engines and the primitives they share.
//!
//! Engines are plain synchronous state machines: every user intent is a
//! method call that either applies a transition or returns an
//! [`InvalidTransition`](crate::error::InvalidTransition) and leaves the
//! state untouched. Delayed auto-advance lives in [`advance`].

pub mod advance;
pub mod cursor;
pub mod flashcard;
pub mod guess;
pub mod rating;
pub mod unscramble;

use serde::Serialize;

use crate::games::cursor::{AdvanceTicket, Scoreboard};
use crate::games::rating::Rating;

pub use advance::{AdvancingScreen, AutoAdvancing, PendingAdvance};
pub use flashcard::{FlashcardEngine, FlashcardView};
pub use guess::{GuessPhase, GuessView, GuessWordEngine};
pub use unscramble::{UnscrambleEngine, UnscrambleView};

/// Final result of a scored game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: usize,
    pub total: usize,
    pub rating: Rating,
}

impl GameSummary {
    pub(crate) fn from_scoreboard(board: &Scoreboard) -> Self {
        Self {
            score: board.correct(),
            total: board.total(),
            rating: board.rating(),
        }
    }
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub correct: bool,
    pub next: AfterReveal,
}

/// What happens once the reveal has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterReveal {
    /// Redeem the ticket after the advance delay to move on.
    Advance(AdvanceTicket),
    /// That was the last item; the game is over.
    Finished(GameSummary),
}
