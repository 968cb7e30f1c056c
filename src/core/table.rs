//! Per-behavior registry of transition rules.

use super::destination::Destination;
use super::error::ConfigError;
use super::guard::{self, Guard};
use super::resolve;
use super::source::Source;
use super::state::State;
use std::collections::HashMap;
use std::fmt;

/// One registered rule: from `source`, go to `destination` when all `guards`
/// hold, or to `error_fallback` if the behavior fails.
pub struct TransitionSpec<O, S: State> {
    pub source: Source<S>,
    pub destination: Destination<S>,
    pub guards: Vec<Guard<O>>,
    pub error_fallback: Option<S>,
}

impl<O, S: State> fmt::Debug for TransitionSpec<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSpec")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("guards", &self.guards.len())
            .field("error_fallback", &self.error_fallback)
            .finish()
    }
}

/// A source with no rule registered for it.
///
/// Table lookups report this; the engine turns it into a
/// [`TransitionError`](crate::engine::TransitionError) naming the behavior.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No transition from '{state}' via '{behavior}'")]
pub struct NoTransition {
    pub behavior: String,
    pub state: String,
}

/// Map from source specifier to its rule, owned by exactly one tag.
///
/// At most one rule may exist per source; lookup is keyed, never scanned.
pub struct TransitionTable<O, S: State> {
    behavior: String,
    specs: HashMap<Source<S>, TransitionSpec<O, S>>,
}

impl<O, S: State> TransitionTable<O, S> {
    /// Create an empty table for the named behavior.
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            specs: HashMap::new(),
        }
    }

    pub fn behavior(&self) -> &str {
        &self.behavior
    }

    /// Register a rule. Fails if `source` already has one.
    pub fn add_transition(
        &mut self,
        source: Source<S>,
        destination: Destination<S>,
        guards: Vec<Guard<O>>,
        error_fallback: Option<S>,
    ) -> Result<(), ConfigError> {
        if self.specs.contains_key(&source) {
            return Err(ConfigError::DuplicateSource {
                behavior: self.behavior.clone(),
                state: source.to_string(),
            });
        }

        let spec = TransitionSpec {
            source: source.clone(),
            destination,
            guards,
            error_fallback,
        };
        self.specs.insert(source, spec);
        Ok(())
    }

    /// The rule registered for exactly this source specifier.
    pub fn spec_for(&self, source: &Source<S>) -> Option<&TransitionSpec<O, S>> {
        self.specs.get(source)
    }

    pub fn sources(&self) -> impl Iterator<Item = &Source<S>> {
        self.specs.keys()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Whether the rule resolved for `current` has all of its guards holding.
    ///
    /// No rule means the conditions cannot be met.
    pub fn conditions_met(&self, object: &O, current: &S) -> bool {
        match resolve::resolve(self, current) {
            None => false,
            Some(spec) => guard::all_hold(&spec.guards, object),
        }
    }

    /// Destination of the rule resolved for `current`. Guards are not
    /// consulted.
    pub fn next_state(&self, current: &S) -> Result<&Destination<S>, NoTransition> {
        self.resolved(current).map(|spec| &spec.destination)
    }

    /// Error-fallback state of the rule resolved for `current`.
    pub fn error_fallback_state(&self, current: &S) -> Result<Option<&S>, NoTransition> {
        self.resolved(current)
            .map(|spec| spec.error_fallback.as_ref())
    }

    fn resolved(&self, current: &S) -> Result<&TransitionSpec<O, S>, NoTransition> {
        resolve::resolve(self, current).ok_or_else(|| NoTransition {
            behavior: self.behavior.clone(),
            state: current.name().to_string(),
        })
    }
}

impl<O, S: State> fmt::Debug for TransitionTable<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("behavior", &self.behavior)
            .field("specs", &self.specs.values().collect::<Vec<_>>())
            .finish()
    }
}
