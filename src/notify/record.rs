//! Owned outcome records and an observer that collects them.

use super::{Observer, ObserverError, TransitionOutcome};
use crate::core::State;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Owned copy of a [`TransitionOutcome`].
///
/// The acting object is not kept; the causing error is rendered to text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct OutcomeRecord<S: State> {
    pub behavior: String,
    pub holder: String,
    pub args: String,
    pub source: S,
    pub destination: Option<S>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<S: State> OutcomeRecord<S> {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Observer that keeps every outcome it receives, in order.
///
/// Clones share the same records, so one clone can be connected to a
/// [`Signal`](super::Signal) while another is inspected.
///
/// ```rust
/// use tagged_fsm::notify::{OutcomeLog, Signal, TransitionOutcome};
///
/// struct Job;
///
/// let signal: Signal<Job, String> = Signal::new();
/// let log = OutcomeLog::new();
/// signal.connect(log.clone());
///
/// signal.send(&TransitionOutcome {
///     object: &Job,
///     behavior: "start",
///     holder: "state",
///     args: "()",
///     source: "queued".to_string(),
///     destination: Some("running".to_string()),
///     error: None,
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.path(), vec!["queued".to_string(), "running".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct OutcomeLog<S: State> {
    records: Arc<Mutex<Vec<OutcomeRecord<S>>>>,
}

impl<S: State> OutcomeLog<S> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn records(&self) -> Vec<OutcomeRecord<S>> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn last(&self) -> Option<OutcomeRecord<S>> {
        self.records.lock().last().cloned()
    }

    /// States traversed: the first record's source, then each committed
    /// destination. Unchanged-state outcomes add nothing.
    pub fn path(&self) -> Vec<S> {
        let records = self.records.lock();
        let mut path = Vec::new();
        if let Some(first) = records.first() {
            path.push(first.source.clone());
        }
        path.extend(records.iter().filter_map(|r| r.destination.clone()));
        path
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Serialize every record as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.records.lock())
    }
}

impl<S: State> Default for OutcomeLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S: State> Observer<O, S> for OutcomeLog<S> {
    fn on_transition(&self, outcome: &TransitionOutcome<'_, O, S>) -> Result<(), ObserverError> {
        self.records.lock().push(outcome.to_record());
        Ok(())
    }
}
