//! Flip-and-browse flashcards.

use crate::error::InvalidTransition;
use crate::games::cursor::Cursor;
use crate::model::FlashCard;

/// Linear cursor over a deck of two-sided cards. No scoring.
#[derive(Debug, Clone)]
pub struct FlashcardEngine {
    cards: Vec<FlashCard>,
    cursor: Cursor,
    flipped: bool,
}

/// Everything the presentation layer needs to draw the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashcardView<'a> {
    pub index: usize,
    pub total: usize,
    /// `None` only for an empty deck.
    pub card: Option<&'a FlashCard>,
    pub flipped: bool,
    /// Navigation buttons are disabled for decks of one card or none.
    pub can_navigate: bool,
    /// The congratulation panel is shown on the last card.
    pub reached_end: bool,
}

impl FlashcardEngine {
    pub fn new(cards: Vec<FlashCard>) -> Self {
        let cursor = Cursor::new(cards.len());
        Self {
            cards,
            cursor,
            flipped: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn current(&self) -> Option<&FlashCard> {
        self.cards.get(self.cursor.index())
    }

    /// Turn the current card over.
    pub fn flip(&mut self) -> Result<(), InvalidTransition> {
        if self.is_empty() {
            return Err(InvalidTransition::Empty);
        }
        self.flipped = !self.flipped;
        Ok(())
    }

    /// Show the next card, wrapping to the first after the last.
    pub fn next(&mut self) {
        if self.cursor.wrap_next() {
            self.flipped = false;
        }
    }

    /// Show the previous card, wrapping to the last before the first.
    pub fn previous(&mut self) {
        if self.cursor.wrap_prev() {
            self.flipped = false;
        }
    }

    /// Jump to a card picked from the progress dots.
    pub fn jump_to(&mut self, index: usize) -> Result<(), InvalidTransition> {
        self.cursor.jump(index)?;
        self.flipped = false;
        Ok(())
    }

    pub fn view(&self) -> FlashcardView<'_> {
        FlashcardView {
            index: self.cursor.index(),
            total: self.cards.len(),
            card: self.current(),
            flipped: self.flipped,
            can_navigate: self.cards.len() > 1,
            reached_end: self.cursor.is_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> FlashcardEngine {
        FlashcardEngine::new(
            (0..n)
                .map(|i| FlashCard::new(format!("word{i}"), format!("слово{i}")))
                .collect(),
        )
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for n in 2..6 {
            let mut engine = deck(n);
            engine.jump_to(1).unwrap();
            for _ in 0..n {
                engine.next();
            }
            assert_eq!(engine.index(), 1);
        }
    }

    #[test]
    fn previous_then_next_is_identity() {
        let mut engine = deck(5);
        engine.jump_to(2).unwrap();
        engine.previous();
        engine.next();
        assert_eq!(engine.index(), 2);
        engine.next();
        engine.previous();
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut engine = deck(3);
        engine.jump_to(2).unwrap();
        assert!(engine.view().reached_end);
        engine.next();
        assert_eq!(engine.index(), 0);
        assert!(!engine.view().reached_end);
    }

    #[test]
    fn double_flip_restores_side() {
        let mut engine = deck(2);
        engine.flip().unwrap();
        assert!(engine.is_flipped());
        engine.flip().unwrap();
        assert!(!engine.is_flipped());
    }

    #[test]
    fn navigation_shows_front_side() {
        let mut engine = deck(3);
        engine.flip().unwrap();
        engine.next();
        assert!(!engine.is_flipped());
        engine.flip().unwrap();
        engine.previous();
        assert!(!engine.is_flipped());
        engine.flip().unwrap();
        engine.jump_to(2).unwrap();
        assert!(!engine.is_flipped());
    }

    #[test]
    fn single_card_does_not_navigate() {
        let mut engine = deck(1);
        engine.flip().unwrap();
        engine.next();
        engine.previous();
        assert_eq!(engine.index(), 0);
        // A no-op navigation keeps the card turned over.
        assert!(engine.is_flipped());
        let view = engine.view();
        assert!(!view.can_navigate);
        assert!(view.reached_end);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut engine = deck(0);
        engine.next();
        engine.previous();
        assert_eq!(engine.flip(), Err(InvalidTransition::Empty));
        assert_eq!(
            engine.jump_to(0),
            Err(InvalidTransition::OutOfRange { index: 0, len: 0 })
        );
        let view = engine.view();
        assert!(view.card.is_none());
        assert!(!view.can_navigate);
        assert!(!view.reached_end);
        assert_eq!(view.total, 0);
    }

    #[test]
    fn out_of_range_jump_keeps_state() {
        let mut engine = deck(3);
        engine.jump_to(1).unwrap();
        engine.flip().unwrap();
        assert!(engine.jump_to(7).is_err());
        assert_eq!(engine.index(), 1);
        assert!(engine.is_flipped());
    }
}
