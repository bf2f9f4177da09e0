//! Request cancellation.
//!
//! A [`RequestGeneration`] is shared between a host and the requests it
//! starts. Starting a request bumps the generation and hands out a
//! [`RequestTicket`]; the ticket is cancelled as soon as the generation moves
//! on, either because a newer request started or because the host called
//! [`RequestGeneration::cancel_all`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The request was superseded or cancelled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request cancelled")]
pub struct Cancelled;

/// Monotonic request counter shared by a host and its requests.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Creates a new counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, cancelling every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        RequestTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Cancels every outstanding ticket.
    pub fn cancel_all(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}

/// A handle held by one in-flight request.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestTicket {
    /// A ticket that is never cancelled, for callers without a host.
    #[must_use]
    pub fn detached() -> Self {
        RequestGeneration::new().begin()
    }

    /// Returns true if the ticket has been superseded.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Relaxed) != self.generation
    }

    /// Returns `Err(Cancelled)` if the ticket has been superseded.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_cancels_older_ticket() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(!first.is_cancelled());

        let second = generation.begin();
        assert!(first.is_cancelled());
        assert_eq!(first.check(), Err(Cancelled));
        assert_eq!(second.check(), Ok(()));
    }

    #[test]
    fn cancel_all_cancels_current_ticket() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.cancel_all();
        assert!(ticket.is_cancelled());
    }

    #[test]
    fn detached_ticket_stays_live() {
        let ticket = RequestTicket::detached();
        assert!(!ticket.is_cancelled());
    }
}
