//! Delayed auto-advance after a reveal.
//!
//! A reveal is shown for a fixed delay before the next question appears.
//! The delay runs as a spawned tokio task owned by a [`PendingAdvance`];
//! cancelling or dropping it aborts the task, so a screen that is torn down
//! can never be advanced afterwards.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::InvalidTransition;
use crate::games::cursor::AdvanceTicket;
use crate::games::{AfterReveal, Reveal};

/// How long a guess-the-word reveal stays on screen.
pub const GUESS_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// How long an unscramble reveal stays on screen.
pub const UNSCRAMBLE_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// An engine that moves on when a reveal ticket is redeemed.
pub trait AutoAdvancing {
    /// Move past the reveal identified by `ticket`.
    ///
    /// Returns `false` and changes nothing if the ticket is stale.
    fn advance(&mut self, ticket: AdvanceTicket) -> bool;

    /// Back to the first item with a zero score.
    fn restart(&mut self);
}

/// A scheduled advance that has not been applied yet.
#[derive(Debug)]
pub struct PendingAdvance {
    ticket: AdvanceTicket,
    handle: JoinHandle<()>,
    fired: oneshot::Receiver<AdvanceTicket>,
}

impl PendingAdvance {
    /// Start the delay. Must be called from within a tokio runtime.
    pub fn schedule(delay: Duration, ticket: AdvanceTicket) -> Self {
        let (tx, fired) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ticket);
        });
        Self {
            ticket,
            handle,
            fired,
        }
    }

    pub fn ticket(&self) -> AdvanceTicket {
        self.ticket
    }

    /// Stop the timer. Equivalent to dropping.
    pub fn cancel(self) {}

    /// Wait for the delay to elapse. `None` if the timer task was aborted.
    pub async fn wait(mut self) -> Option<AdvanceTicket> {
        self.fired().await
    }

    /// Like [`PendingAdvance::wait`] without giving up the timer, so the
    /// wait can be raced against other events and resumed.
    ///
    /// Must not be polled again once it has completed.
    pub async fn fired(&mut self) -> Option<AdvanceTicket> {
        (&mut self.fired).await.ok()
    }
}

impl Drop for PendingAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One engine plus at most one pending advance.
///
/// Reveals go through [`AdvancingScreen::reveal_with`] so the timer is
/// scheduled; other intents use [`AdvancingScreen::engine_mut`].
#[derive(Debug)]
pub struct AdvancingScreen<E> {
    engine: E,
    delay: Duration,
    pending: Option<PendingAdvance>,
}

impl<E: AutoAdvancing> AdvancingScreen<E> {
    pub fn new(engine: E, delay: Duration) -> Self {
        Self {
            engine,
            delay,
            pending: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run a revealing intent (`confirm`, `check`) and schedule the advance.
    pub fn reveal_with<F>(&mut self, reveal: F) -> Result<Reveal, InvalidTransition>
    where
        F: FnOnce(&mut E) -> Result<Reveal, InvalidTransition>,
    {
        let outcome = reveal(&mut self.engine)?;
        if let AfterReveal::Advance(ticket) = outcome.next {
            self.pending = Some(PendingAdvance::schedule(self.delay, ticket));
        }
        Ok(outcome)
    }

    pub fn is_advance_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait out the pending delay and apply it. `false` if nothing moved.
    ///
    /// Cancel-safe: dropping the future before it completes leaves the
    /// advance pending.
    pub async fn wait_for_advance(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let fired = pending.fired().await;
        self.pending = None;
        match fired {
            Some(ticket) => self.engine.advance(ticket),
            None => false,
        }
    }

    pub fn cancel_advance(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("cancelled pending advance");
            pending.cancel();
        }
    }

    /// Cancel any pending advance and restart the game.
    pub fn restart(&mut self) {
        self.cancel_advance();
        self.engine.restart();
    }
}
