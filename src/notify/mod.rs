//! Publishing transition outcomes to observers.
//!
//! Every call that ends in a definitive new state (success, or an error
//! fallback) produces one [`TransitionOutcome`], delivered to each observer
//! connected to the transition's [`Signal`]. Delivery is fire-and-forget:
//! an observer that fails is logged and skipped, and never changes what the
//! caller of the transition sees.

mod record;
mod signal;

pub use record::{OutcomeLog, OutcomeRecord};
pub use signal::{Signal, SubscriptionId};

use crate::core::State;
use chrono::Utc;
use std::error::Error;

/// Error an observer may report. It is logged, never propagated.
pub type ObserverError = Box<dyn Error + Send + Sync>;

/// Record of one executed transition attempt.
///
/// Outcomes borrow the acting object and the causing error, so observers see
/// them only for the duration of the callback. Use
/// [`to_record`](Self::to_record) to keep an owned copy.
pub struct TransitionOutcome<'a, O, S: State> {
    /// The object that was transitioned.
    pub object: &'a O,

    /// Name of the transition behavior.
    pub behavior: &'a str,

    /// Name of the state holder the transition committed through.
    pub holder: &'a str,

    /// `Debug` rendering of the arguments the behavior was called with.
    pub args: &'a str,

    /// State before the call.
    pub source: S,

    /// Committed state; `None` when the transition leaves the state unchanged.
    pub destination: Option<S>,

    /// The behavior's error, when the outcome is an error fallback.
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<O, S: State> TransitionOutcome<'_, O, S> {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Owned, serializable copy of this outcome, stamped now.
    pub fn to_record(&self) -> OutcomeRecord<S> {
        OutcomeRecord {
            behavior: self.behavior.to_string(),
            holder: self.holder.to_string(),
            args: self.args.to_string(),
            source: self.source.clone(),
            destination: self.destination.clone(),
            error: self.error.map(ToString::to_string),
            timestamp: Utc::now(),
        }
    }
}

/// Receives transition outcomes for objects of type `O`.
///
/// Any `Fn(&TransitionOutcome<O, S>)` closure is an observer.
pub trait Observer<O, S: State>: Send + Sync {
    fn on_transition(&self, outcome: &TransitionOutcome<'_, O, S>) -> Result<(), ObserverError>;
}

impl<O, S, F> Observer<O, S> for F
where
    S: State,
    F: Fn(&TransitionOutcome<'_, O, S>) + Send + Sync,
{
    fn on_transition(&self, outcome: &TransitionOutcome<'_, O, S>) -> Result<(), ObserverError> {
        self(outcome);
        Ok(())
    }
}
