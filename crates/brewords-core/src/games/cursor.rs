//! Cursor, score, and advance-ticket primitives shared by the engines.

use crate::error::InvalidTransition;
use crate::games::rating::{rate, Rating};

/// A position within an ordered list of cards or questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_last(&self) -> bool {
        self.len > 0 && self.index == self.len - 1
    }

    /// Move forward, wrapping from the last item to the first.
    ///
    /// Returns `false` (and does nothing) when there is at most one item.
    pub fn wrap_next(&mut self) -> bool {
        if self.len <= 1 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Move backward, wrapping from the first item to the last.
    pub fn wrap_prev(&mut self) -> bool {
        if self.len <= 1 {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    /// Jump directly to `index`.
    pub fn jump(&mut self, index: usize) -> Result<(), InvalidTransition> {
        if index >= self.len {
            return Err(InvalidTransition::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Move forward without wrapping. Returns `false` on the last item.
    pub fn step(&mut self) -> bool {
        if self.index + 1 >= self.len {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn rewind(&mut self) {
        self.index = 0;
    }
}

/// Running count of correct answers out of a fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    correct: usize,
    total: usize,
}

impl Scoreboard {
    pub fn new(total: usize) -> Self {
        Self { correct: 0, total }
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn reset(&mut self) {
        self.correct = 0;
    }

    pub fn rating(&self) -> Rating {
        rate(self.correct, self.total)
    }
}

/// Permission to advance past one specific reveal.
///
/// Engines hand out a ticket when an answer is revealed and only honour the
/// most recent one, so a timer that fires after a reset is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    generation: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TicketIssuer {
    generation: u64,
    outstanding: bool,
}

impl TicketIssuer {
    pub(crate) fn issue(&mut self) -> AdvanceTicket {
        self.generation += 1;
        self.outstanding = true;
        AdvanceTicket {
            generation: self.generation,
        }
    }

    /// Consume `ticket` if it is the current one.
    pub(crate) fn redeem(&mut self, ticket: AdvanceTicket) -> bool {
        if self.outstanding && ticket.generation == self.generation {
            self.outstanding = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn revoke(&mut self) {
        self.generation += 1;
        self.outstanding = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_next_cycles_back_to_start() {
        for len in 2..8 {
            let mut cursor = Cursor::new(len);
            cursor.jump(len / 2).unwrap();
            let start = cursor.index();
            for _ in 0..len {
                assert!(cursor.wrap_next());
            }
            assert_eq!(cursor.index(), start);
        }
    }

    #[test]
    fn wrap_prev_from_first_goes_to_last() {
        let mut cursor = Cursor::new(5);
        cursor.wrap_prev();
        assert_eq!(cursor.index(), 4);
        assert!(cursor.is_last());
    }

    #[test]
    fn single_and_empty_lists_do_not_move() {
        let mut one = Cursor::new(1);
        assert!(!one.wrap_next());
        assert!(!one.wrap_prev());
        assert_eq!(one.index(), 0);

        let mut none = Cursor::new(0);
        assert!(!none.wrap_next());
        assert!(!none.wrap_prev());
        assert!(!none.step());
        assert!(!none.is_last());
    }

    #[test]
    fn jump_is_bounds_checked() {
        let mut cursor = Cursor::new(3);
        assert!(cursor.jump(2).is_ok());
        assert_eq!(
            cursor.jump(3),
            Err(InvalidTransition::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn step_stops_at_last() {
        let mut cursor = Cursor::new(2);
        assert!(cursor.step());
        assert!(!cursor.step());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn tickets_are_single_use_and_revocable() {
        let mut issuer = TicketIssuer::default();
        let first = issuer.issue();
        assert!(issuer.redeem(first));
        assert!(!issuer.redeem(first));

        let second = issuer.issue();
        issuer.revoke();
        assert!(!issuer.redeem(second));

        let third = issuer.issue();
        assert!(!issuer.redeem(second));
        assert!(issuer.redeem(third));
    }
}
