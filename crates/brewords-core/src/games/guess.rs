//! Guess-the-word: pick the translation out of four options.

use serde::Serialize;

use crate::error::InvalidTransition;
use crate::games::advance::AutoAdvancing;
use crate::games::cursor::{AdvanceTicket, Cursor, Scoreboard, TicketIssuer};
use crate::games::{AfterReveal, GameSummary, Reveal};
use crate::model::GuessQuestion;

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessPhase {
    Unanswered,
    Selected,
    Revealed,
    /// The last question has been revealed; only `reset` is accepted.
    Complete,
}

/// Multiple-choice quiz over a fixed list of questions.
#[derive(Debug, Clone)]
pub struct GuessWordEngine {
    questions: Vec<GuessQuestion>,
    cursor: Cursor,
    score: Scoreboard,
    selection: Option<usize>,
    revealed: bool,
    tickets: TicketIssuer,
}

/// Snapshot for rendering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessView<'a> {
    pub index: usize,
    pub total: usize,
    pub question: Option<&'a GuessQuestion>,
    pub selected: Option<&'a str>,
    pub phase: GuessPhase,
    pub score: usize,
    /// Whether the revealed answer was right; `None` before reveal.
    pub correct: Option<bool>,
}

impl GuessWordEngine {
    pub fn new(questions: Vec<GuessQuestion>) -> Self {
        let cursor = Cursor::new(questions.len());
        let score = Scoreboard::new(questions.len());
        Self {
            questions,
            cursor,
            score,
            selection: None,
            revealed: false,
            tickets: TicketIssuer::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn score(&self) -> usize {
        self.score.correct()
    }

    pub fn current(&self) -> Option<&GuessQuestion> {
        self.questions.get(self.cursor.index())
    }

    pub fn selected(&self) -> Option<&str> {
        let question = self.current()?;
        self.selection
            .and_then(|i| question.options.get(i))
            .map(String::as_str)
    }

    pub fn phase(&self) -> GuessPhase {
        if self.revealed && self.cursor.is_last() {
            GuessPhase::Complete
        } else if self.revealed {
            GuessPhase::Revealed
        } else if self.selection.is_some() {
            GuessPhase::Selected
        } else {
            GuessPhase::Unanswered
        }
    }

    /// Choose an option. Re-selecting replaces the previous choice.
    pub fn select_answer(&mut self, option: &str) -> Result<(), InvalidTransition> {
        self.ensure_open()?;
        let question = self.current().ok_or(InvalidTransition::Empty)?;
        let position = question
            .options
            .iter()
            .position(|o| o == option)
            .ok_or(InvalidTransition::UnknownOption)?;
        self.selection = Some(position);
        Ok(())
    }

    /// Choose an option by its display position.
    pub fn select_option(&mut self, position: usize) -> Result<(), InvalidTransition> {
        self.ensure_open()?;
        let question = self.current().ok_or(InvalidTransition::Empty)?;
        if position >= question.options.len() {
            return Err(InvalidTransition::OutOfRange {
                index: position,
                len: question.options.len(),
            });
        }
        self.selection = Some(position);
        Ok(())
    }

    /// Lock in the selection and reveal whether it was right.
    pub fn confirm(&mut self) -> Result<Reveal, InvalidTransition> {
        self.ensure_open()?;
        let question = self.current().ok_or(InvalidTransition::Empty)?;
        let selection = self.selection.ok_or(InvalidTransition::NoSelection)?;
        let correct = question.options[selection] == question.correct_answer;

        self.score.record(correct);
        self.revealed = true;

        let next = if self.cursor.is_last() {
            AfterReveal::Finished(self.summary_now())
        } else {
            AfterReveal::Advance(self.tickets.issue())
        };
        tracing::debug!(
            index = self.cursor.index(),
            correct,
            score = self.score.correct(),
            "guess revealed"
        );
        Ok(Reveal { correct, next })
    }

    /// Start over from the first question with a zero score.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.score.reset();
        self.selection = None;
        self.revealed = false;
        self.tickets.revoke();
    }

    /// Final result, available once the last question is revealed.
    pub fn summary(&self) -> Option<GameSummary> {
        (self.phase() == GuessPhase::Complete).then(|| self.summary_now())
    }

    pub fn view(&self) -> GuessView<'_> {
        let correct = if self.revealed {
            self.current()
                .zip(self.selected())
                .map(|(q, s)| s == q.correct_answer)
        } else {
            None
        };
        GuessView {
            index: self.cursor.index(),
            total: self.questions.len(),
            question: self.current(),
            selected: self.selected(),
            phase: self.phase(),
            score: self.score.correct(),
            correct,
        }
    }

    fn summary_now(&self) -> GameSummary {
        GameSummary::from_scoreboard(&self.score)
    }

    fn ensure_open(&self) -> Result<(), InvalidTransition> {
        if self.is_empty() {
            return Err(InvalidTransition::Empty);
        }
        match self.phase() {
            GuessPhase::Complete => Err(InvalidTransition::Complete),
            GuessPhase::Revealed => Err(InvalidTransition::Revealed),
            _ => Ok(()),
        }
    }
}

impl AutoAdvancing for GuessWordEngine {
    fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        if !self.revealed || !self.tickets.redeem(ticket) {
            return false;
        }
        if !self.cursor.step() {
            return false;
        }
        self.selection = None;
        self.revealed = false;
        true
    }

    fn restart(&mut self) {
        self.reset();
    }
}
