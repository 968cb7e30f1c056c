//! A state field embedded in the acting object, with read-only protection.

use super::error::StorageError;
use super::StateStore;
use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for a [`StateField`].
///
/// ```rust
/// use tagged_fsm::storage::FieldOptions;
///
/// let options: FieldOptions = serde_json::from_str("{}").unwrap();
/// assert!(options.readonly);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Refuse direct writes once the field holds a state.
    #[serde(default = "default_readonly")]
    pub readonly: bool,
}

fn default_readonly() -> bool {
    true
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            readonly: default_readonly(),
        }
    }
}

/// Holds an object's current state.
///
/// With `readonly` set (the default), the first [`set`](Self::set)
/// initializes the field and every later direct `set` is refused. Transitions
/// still commit through a [`FieldStore`], which is the only writer allowed
/// past initialization.
#[derive(Clone, PartialEq, Eq)]
pub struct StateField<S: State> {
    value: Option<S>,
    options: FieldOptions,
}

impl<S: State> StateField<S> {
    /// An uninitialized field.
    pub fn new(options: FieldOptions) -> Self {
        Self {
            value: None,
            options,
        }
    }

    /// A field initialized to `state`.
    pub fn with_state(state: impl Into<S>, options: FieldOptions) -> Self {
        Self {
            value: Some(state.into()),
            options,
        }
    }

    pub fn get(&self) -> Option<&S> {
        self.value.as_ref()
    }

    pub fn options(&self) -> FieldOptions {
        self.options
    }

    /// Directly assign the state, subject to the read-only policy.
    pub fn set(&mut self, state: impl Into<S>) -> Result<(), StorageError> {
        if self.options.readonly && self.value.is_some() {
            return Err(StorageError::ReadOnly);
        }
        self.value = Some(state.into());
        Ok(())
    }

    fn commit(&mut self, state: S) {
        self.value = Some(state);
    }
}

impl<S: State> Default for StateField<S> {
    fn default() -> Self {
        Self::new(FieldOptions::default())
    }
}

impl<S: State> fmt::Debug for StateField<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(state) => write!(f, "StateField({})", state.name()),
            None => f.write_str("StateField(<unset>)"),
        }
    }
}

/// Exposes a [`StateField`] of `O` as a named [`StateStore`].
///
/// ```rust
/// use tagged_fsm::storage::{FieldOptions, FieldStore, StateField, StateStore};
///
/// struct Ticket {
///     status: StateField<String>,
/// }
///
/// let store = FieldStore::new("status", |t: &Ticket| &t.status, |t: &mut Ticket| &mut t.status);
/// let mut ticket = Ticket {
///     status: StateField::with_state("open", FieldOptions::default()),
/// };
///
/// store.write(&mut ticket, "closed".to_string()).unwrap();
/// assert_eq!(store.read(&ticket).unwrap(), "closed");
/// assert!(ticket.status.set("open").is_err());
/// ```
pub struct FieldStore<O, S: State> {
    name: String,
    field: fn(&O) -> &StateField<S>,
    field_mut: fn(&mut O) -> &mut StateField<S>,
}

impl<O, S: State> FieldStore<O, S> {
    pub fn new(
        name: impl Into<String>,
        field: fn(&O) -> &StateField<S>,
        field_mut: fn(&mut O) -> &mut StateField<S>,
    ) -> Self {
        Self {
            name: name.into(),
            field,
            field_mut,
        }
    }
}

impl<O, S: State> StateStore<O, S> for FieldStore<O, S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self, object: &O) -> Result<S, StorageError> {
        (self.field)(object)
            .get()
            .cloned()
            .ok_or_else(|| StorageError::Uninitialized {
                holder: self.name.clone(),
            })
    }

    fn write(&self, object: &mut O, state: S) -> Result<(), StorageError> {
        (self.field_mut)(object).commit(state);
        Ok(())
    }
}
