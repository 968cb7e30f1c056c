//! Errors raised while binding and executing transitions.

use crate::core::InvalidResult;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors from one call of a transition behavior.
///
/// `E` is the behavior's own error type. A behavior error is returned
/// unmodified inside [`Behavior`](Self::Behavior), whether or not an error
/// fallback state was committed.
#[derive(Debug, Error)]
pub enum TransitionError<E> {
    /// No registered source matches the current state.
    #[error("No transition from '{state}' via '{behavior}'")]
    NotAllowed { behavior: String, state: String },

    /// A source matches, but at least one guard does not hold.
    #[error("Guard conditions not met for '{behavior}' in state '{state}'")]
    GuardsNotMet { behavior: String, state: String },

    /// A ONE_OF behavior returned a state outside its destination set.
    #[error("'{behavior}' returned an invalid destination: {cause}")]
    InvalidResult {
        behavior: String,
        #[source]
        cause: InvalidResult,
    },

    /// The tag has not been bound to a state store yet.
    #[error("'{behavior}' is not bound to state holder '{holder}'")]
    Unbound { behavior: String, holder: String },

    /// A ONE_OF destination was executed without a selecting behavior.
    #[error("'{behavior}' selects its destination with ONE_OF; call it through execute_selecting()")]
    NeedsSelecting { behavior: String },

    /// Reading or committing state failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The wrapped behavior failed.
    #[error(transparent)]
    Behavior(E),
}

impl<E> TransitionError<E> {
    /// Whether the transition was refused before the behavior ran.
    pub fn is_not_allowed(&self) -> bool {
        matches!(self, Self::NotAllowed { .. } | Self::GuardsNotMet { .. })
    }

    /// The behavior's own error, if that is what this is.
    pub fn into_behavior(self) -> Option<E> {
        match self {
            Self::Behavior(error) => Some(error),
            _ => None,
        }
    }

    pub fn behavior_error(&self) -> Option<&E> {
        match self {
            Self::Behavior(error) => Some(error),
            _ => None,
        }
    }
}

/// Errors from attaching a state store to declared transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("'{behavior}' refers to state holder '{holder}', which is not registered")]
    UnknownHolder { behavior: String, holder: String },

    #[error("'{behavior}' expects state holder '{holder}' but was given '{store}'")]
    HolderMismatch {
        behavior: String,
        holder: String,
        store: String,
    },

    #[error("'{behavior}' is already bound to a state holder")]
    AlreadyBound { behavior: String },

    #[error("{} binding errors", .0.len())]
    Several(Vec<BindError>),
}

impl BindError {
    pub(crate) fn combine(mut errors: Vec<BindError>) -> BindError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            BindError::Several(errors)
        }
    }
}
