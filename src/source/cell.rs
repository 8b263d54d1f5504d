//! Shared load-state cell that sources publish through.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::ui::content::{LoadIntent, LoadReducer, LoadState};
use crate::ui::mvi::Reducer;

/// Generation stamp handed out when a load starts.
///
/// Results are applied only while their ticket is the most recent one, so a
/// superseded load can never overwrite the outcome of a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

struct Inner<T> {
    tx: watch::Sender<LoadState<T>>,
    /// Current generation. Held while publishing so that the staleness check
    /// and the write happen as one step.
    generation: Mutex<u64>,
}

/// Single-writer state cell with change notification.
///
/// Writers go through [`LoadReducer`]; readers take snapshots or subscribe to
/// a `watch` channel. Dropping a receiver releases the subscription.
pub struct LoadCell<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for LoadCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for LoadCell<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadCell<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a cell in the `Idle` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LoadState::Idle);
        Self {
            inner: Arc::new(Inner {
                tx,
                generation: Mutex::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> LoadState<T> {
        self.inner.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.inner.tx.subscribe()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }

    /// Start a new load generation, superseding every earlier ticket.
    ///
    /// The state itself is left untouched.
    pub fn ticket(&self) -> LoadTicket {
        let mut generation = self.inner.generation.lock();
        *generation += 1;
        LoadTicket {
            generation: *generation,
        }
    }

    /// Start a new generation and move to `Loading` right away.
    pub fn begin(&self) -> LoadTicket {
        let mut generation = self.inner.generation.lock();
        *generation += 1;
        let ticket = LoadTicket {
            generation: *generation,
        };
        self.publish(ticket.generation, LoadIntent::Begin);
        ticket
    }

    /// Apply `intent` if `ticket` is still current.
    ///
    /// Returns `false` (and leaves the state alone) for stale tickets.
    pub fn apply(&self, ticket: &LoadTicket, intent: LoadIntent<T>) -> bool {
        let generation = self.inner.generation.lock();
        if *generation != ticket.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = *generation,
                "discarding result of superseded load"
            );
            return false;
        }
        self.publish(ticket.generation, intent);
        true
    }

    fn publish(&self, generation: u64, intent: LoadIntent<T>) {
        if let LoadIntent::Fail(error) = &intent {
            tracing::warn!(
                generation,
                reason = error.reason().unwrap_or("-"),
                "load failed"
            );
        }
        self.inner.tx.send_modify(|state| {
            *state = LoadReducer::<T>::reduce(std::mem::take(state), intent);
            tracing::debug!(generation, state = %state.tag(), "load state published");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[test]
    fn starts_idle() {
        let cell: LoadCell<String> = LoadCell::new();
        assert!(cell.snapshot().is_idle());
    }

    #[test]
    fn begin_moves_to_loading() {
        let cell: LoadCell<String> = LoadCell::new();
        let ticket = cell.begin();
        assert_eq!(ticket.generation(), 1);
        assert!(cell.snapshot().is_loading());
    }

    #[test]
    fn ticket_does_not_touch_state() {
        let cell: LoadCell<String> = LoadCell::new();
        let _ticket = cell.ticket();
        assert!(cell.snapshot().is_idle());
    }

    #[test]
    fn current_ticket_applies() {
        let cell: LoadCell<String> = LoadCell::new();
        let ticket = cell.begin();
        assert!(cell.apply(&ticket, LoadIntent::Succeed("value".into())));
        assert_eq!(cell.snapshot(), LoadState::Success("value".into()));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let cell: LoadCell<String> = LoadCell::new();
        let first = cell.begin();
        let second = cell.begin();

        assert!(cell.apply(&second, LoadIntent::Succeed("fresh".into())));
        assert!(!cell.apply(&first, LoadIntent::Fail(PageError::Generic)));
        assert_eq!(cell.snapshot(), LoadState::Success("fresh".into()));
    }

    #[test]
    fn subscribers_see_changes() {
        let cell: LoadCell<u32> = LoadCell::new();
        let mut rx = cell.subscribe();
        assert!(!rx.has_changed().unwrap_or(true));

        let ticket = cell.begin();
        assert!(rx.has_changed().unwrap_or(false));
        assert!(rx.borrow_and_update().is_loading());

        cell.apply(&ticket, LoadIntent::Succeed(3));
        assert_eq!(*rx.borrow_and_update(), LoadState::Success(3));
    }

    #[test]
    fn dropping_receiver_releases_subscription() {
        let cell: LoadCell<u32> = LoadCell::new();
        let rx = cell.subscribe();
        assert_eq!(cell.subscriber_count(), 1);
        drop(rx);
        assert_eq!(cell.subscriber_count(), 0);
    }
}
