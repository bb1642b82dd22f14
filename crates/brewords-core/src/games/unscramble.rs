//! Unscramble: rebuild a sentence from a shuffled word bank.

use crate::error::InvalidTransition;
use crate::games::advance::AutoAdvancing;
use crate::games::cursor::{AdvanceTicket, Cursor, Scoreboard, TicketIssuer};
use crate::games::{AfterReveal, GameSummary, Reveal};
use crate::model::UnscrambleQuestion;

/// Word-bank reordering puzzles over a fixed list of sentences.
///
/// Words move between the bank and the answer by position, never by value,
/// because a sentence may use the same word twice.
#[derive(Debug, Clone)]
pub struct UnscrambleEngine {
    questions: Vec<UnscrambleQuestion>,
    cursor: Cursor,
    score: Scoreboard,
    selected: Vec<String>,
    available: Vec<String>,
    revealed: bool,
    tickets: TicketIssuer,
}

/// Snapshot for rendering the current puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnscrambleView<'a> {
    pub index: usize,
    pub total: usize,
    pub question: Option<&'a UnscrambleQuestion>,
    pub selected: &'a [String],
    pub available: &'a [String],
    pub revealed: bool,
    pub correct: Option<bool>,
    pub score: usize,
    pub can_check: bool,
    pub complete: bool,
}

impl UnscrambleEngine {
    pub fn new(questions: Vec<UnscrambleQuestion>) -> Self {
        let cursor = Cursor::new(questions.len());
        let score = Scoreboard::new(questions.len());
        let available = questions
            .first()
            .map(|q| q.shuffled_words.clone())
            .unwrap_or_default();
        Self {
            questions,
            cursor,
            score,
            selected: Vec::new(),
            available,
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

    pub fn current(&self) -> Option<&UnscrambleQuestion> {
        self.questions.get(self.cursor.index())
    }

    pub fn selected_words(&self) -> &[String] {
        &self.selected
    }

    pub fn available_words(&self) -> &[String] {
        &self.available
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed && self.cursor.is_last()
    }

    /// Whether every word has been placed, so the answer may be checked.
    pub fn can_check(&self) -> bool {
        !self.revealed
            && self
                .current()
                .is_some_and(|q| self.selected.len() == q.correct_order.len())
    }

    /// Move the bank word at `position` to the end of the answer.
    pub fn pick_word(&mut self, position: usize) -> Result<(), InvalidTransition> {
        self.ensure_open()?;
        if position >= self.available.len() {
            return Err(InvalidTransition::OutOfRange {
                index: position,
                len: self.available.len(),
            });
        }
        let word = self.available.remove(position);
        self.selected.push(word);
        Ok(())
    }

    /// Move the answer word at `position` back to the end of the bank.
    pub fn unpick_word(&mut self, position: usize) -> Result<(), InvalidTransition> {
        self.ensure_open()?;
        if position >= self.selected.len() {
            return Err(InvalidTransition::OutOfRange {
                index: position,
                len: self.selected.len(),
            });
        }
        let word = self.selected.remove(position);
        self.available.push(word);
        Ok(())
    }

    /// Clear the answer and restore the full bank for this puzzle.
    pub fn reset_puzzle(&mut self) -> Result<(), InvalidTransition> {
        self.ensure_open()?;
        self.load_current();
        Ok(())
    }

    /// Compare the answer to the sentence, word for word.
    pub fn check(&mut self) -> Result<Reveal, InvalidTransition> {
        self.ensure_open()?;
        let question = self.current().ok_or(InvalidTransition::Empty)?;
        if self.selected.len() != question.correct_order.len() {
            return Err(InvalidTransition::IncompleteAnswer {
                placed: self.selected.len(),
                expected: question.correct_order.len(),
            });
        }
        let correct = self.selected == question.correct_order;

        self.score.record(correct);
        self.revealed = true;

        let next = if self.cursor.is_last() {
            AfterReveal::Finished(GameSummary::from_scoreboard(&self.score))
        } else {
            AfterReveal::Advance(self.tickets.issue())
        };
        tracing::debug!(
            index = self.cursor.index(),
            correct,
            score = self.score.correct(),
            "sentence checked"
        );
        Ok(Reveal { correct, next })
    }

    /// Start over from the first puzzle with a zero score.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.score.reset();
        self.tickets.revoke();
        self.load_current();
    }

    pub fn summary(&self) -> Option<GameSummary> {
        self.is_complete()
            .then(|| GameSummary::from_scoreboard(&self.score))
    }

    pub fn view(&self) -> UnscrambleView<'_> {
        let correct = if self.revealed {
            self.current().map(|q| self.selected == q.correct_order)
        } else {
            None
        };
        UnscrambleView {
            index: self.cursor.index(),
            total: self.questions.len(),
            question: self.current(),
            selected: &self.selected,
            available: &self.available,
            revealed: self.revealed,
            correct,
            score: self.score.correct(),
            can_check: self.can_check(),
            complete: self.is_complete(),
        }
    }

    fn load_current(&mut self) {
        self.selected.clear();
        self.revealed = false;
        self.available = self
            .current()
            .map(|q| q.shuffled_words.clone())
            .unwrap_or_default();
    }

    fn ensure_open(&self) -> Result<(), InvalidTransition> {
        if self.is_empty() {
            Err(InvalidTransition::Empty)
        } else if self.is_complete() {
            Err(InvalidTransition::Complete)
        } else if self.revealed {
            Err(InvalidTransition::Revealed)
        } else {
            Ok(())
        }
    }
}

impl AutoAdvancing for UnscrambleEngine {
    fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        if !self.revealed || !self.tickets.redeem(ticket) {
            return false;
        }
        if !self.cursor.step() {
            return false;
        }
        self.load_current();
        true
    }

    fn restart(&mut self) {
        self.reset();
    }
}
