//! Subscriber list for transition outcomes.

use super::{Observer, TransitionOutcome};
use crate::core::State;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{trace, warn};

/// Handle returned by [`Signal::connect`], used to disconnect later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscribers<O, S> = Vec<(SubscriptionId, Arc<dyn Observer<O, S>>)>;

/// Notification channel for transitions on objects of type `O`.
///
/// One signal is usually shared by every transition declared for a type.
/// Sending takes a snapshot of the subscribers first, so an observer may
/// connect or disconnect others from inside its callback.
pub struct Signal<O, S: State> {
    observers: RwLock<Subscribers<O, S>>,
    next_id: AtomicU64,
}

impl<O, S: State> Signal<O, S> {
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Subscribe an observer.
    pub fn connect<T>(&self, observer: T) -> SubscriptionId
    where
        T: Observer<O, S> + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Unsubscribe. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Deliver `outcome` to every observer. Returns how many accepted it.
    pub fn send(&self, outcome: &TransitionOutcome<'_, O, S>) -> usize {
        let observers: Vec<Arc<dyn Observer<O, S>>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        trace!(
            behavior = outcome.behavior,
            observers = observers.len(),
            "publishing transition outcome"
        );

        let mut delivered = 0;
        for observer in observers {
            match observer.on_transition(outcome) {
                Ok(()) => delivered += 1,
                Err(error) => warn!(
                    behavior = outcome.behavior,
                    source = outcome.source.name(),
                    error = %error,
                    "transition observer failed"
                ),
            }
        }
        delivered
    }
}

impl<O, S: State> Default for Signal<O, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S: State> fmt::Debug for Signal<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.len())
            .finish()
    }
}
