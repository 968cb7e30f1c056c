//! Transition destinations, including the deferred ONE_OF selector.

use super::error::{ConfigError, InvalidResult};
use super::state::State;
use std::fmt;

/// Where a transition leads once its behavior has succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination<S: State> {
    /// Commit this state.
    State(S),

    /// Commit whichever allowed state the behavior returns.
    OneOf(OneOf<S>),

    /// Validate the transition but leave the state as it is.
    Unchanged,
}

impl<S: State> Destination<S> {
    /// The literal destination, if there is one.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::State(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::OneOf(_))
    }
}

impl<S: State> From<S> for Destination<S> {
    fn from(state: S) -> Self {
        Destination::State(state)
    }
}

impl From<&str> for Destination<String> {
    fn from(state: &str) -> Self {
        Destination::State(state.to_string())
    }
}

impl<S: State> From<OneOf<S>> for Destination<S> {
    fn from(selector: OneOf<S>) -> Self {
        Destination::OneOf(selector)
    }
}

impl<S: State> fmt::Display for Destination<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(state) => f.write_str(state.name()),
            Self::OneOf(selector) => write!(f, "{selector}"),
            Self::Unchanged => f.write_str("(unchanged)"),
        }
    }
}

/// Immutable, non-empty set of states a behavior may choose between.
///
/// The behavior's return value picks the destination at execution time.
///
/// ```rust
/// use tagged_fsm::one_of;
///
/// let review = one_of!["approved", "rejected"].unwrap();
///
/// assert_eq!(review.get_state(&"approved".to_string()).unwrap(), "approved");
/// assert!(review.get_state(&"archived".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneOf<S: State> {
    allowed: Vec<S>,
}

impl<S: State> OneOf<S> {
    /// Build a selector from a sequence of states.
    ///
    /// Repeated entries are kept once, in first-seen order. An empty sequence
    /// is rejected with [`ConfigError::EmptyOneOf`].
    pub fn new<I, T>(states: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        Self::from_vec(states.into_iter().map(Into::into).collect())
    }

    /// Build a selector from states that are already of the right type.
    ///
    /// This is what [`one_of!`](crate::one_of) expands to.
    pub fn from_vec(states: Vec<S>) -> Result<Self, ConfigError> {
        let mut allowed: Vec<S> = Vec::with_capacity(states.len());
        for state in states {
            if !allowed.contains(&state) {
                allowed.push(state);
            }
        }

        if allowed.is_empty() {
            return Err(ConfigError::EmptyOneOf);
        }

        Ok(Self { allowed })
    }

    /// Accept `value` as the destination if it is one of the allowed states.
    pub fn get_state(&self, value: &S) -> Result<S, InvalidResult> {
        if self.contains(value) {
            Ok(value.clone())
        } else {
            Err(InvalidResult {
                value: value.name().to_string(),
                allowed: self.allowed.iter().map(|s| s.name().to_string()).collect(),
            })
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.allowed.contains(state)
    }

    pub fn states(&self) -> &[S] {
        &self.allowed
    }
}

impl<S: State> fmt::Display for OneOf<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.allowed.iter().map(State::name).collect();
        write!(f, "ONE_OF({})", names.join(", "))
    }
}
