//! Metadata attached to one transition behavior.

use super::error::BindError;
use crate::core::{resolve, State, TransitionTable};
use crate::notify::Signal;
use crate::storage::StateStore;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// The concrete collaborators a tag executes against.
pub struct Binding<O, S: State> {
    pub store: Arc<dyn StateStore<O, S>>,
    pub signal: Arc<Signal<O, S>>,
}

/// Owns one behavior's transition table and refers to its state holder.
///
/// At declaration time the holder is only a name. Binding attaches the
/// named store (and the signal outcomes are published on) exactly once;
/// the table is never re-validated when that happens.
pub struct TransitionTag<O, S: State> {
    table: TransitionTable<O, S>,
    holder: String,
    binding: OnceLock<Binding<O, S>>,
}

impl<O, S: State> TransitionTag<O, S> {
    pub fn new(table: TransitionTable<O, S>, holder: impl Into<String>) -> Self {
        Self {
            table,
            holder: holder.into(),
            binding: OnceLock::new(),
        }
    }

    /// Name of the tagged behavior.
    pub fn behavior(&self) -> &str {
        self.table.behavior()
    }

    /// Name of the state holder this tag refers to.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn table(&self) -> &TransitionTable<O, S> {
        &self.table
    }

    /// Attach the state store and signal.
    ///
    /// The store must be registered under this tag's holder name.
    pub fn bind(
        &self,
        store: Arc<dyn StateStore<O, S>>,
        signal: Arc<Signal<O, S>>,
    ) -> Result<(), BindError> {
        if store.name() != self.holder {
            return Err(BindError::HolderMismatch {
                behavior: self.behavior().to_string(),
                holder: self.holder.clone(),
                store: store.name().to_string(),
            });
        }

        self.binding
            .set(Binding { store, signal })
            .map_err(|_| BindError::AlreadyBound {
                behavior: self.behavior().to_string(),
            })?;

        debug!(
            behavior = self.behavior(),
            holder = %self.holder,
            "transition bound to state holder"
        );
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.get().is_some()
    }

    pub fn binding(&self) -> Option<&Binding<O, S>> {
        self.binding.get()
    }

    /// Whether a call right now would get past the source and guard checks.
    ///
    /// An unbound tag, or a state that cannot be read, cannot proceed.
    pub fn can_proceed(&self, object: &O) -> bool {
        let Some(binding) = self.binding.get() else {
            return false;
        };
        let Ok(current) = binding.store.read(object) else {
            return false;
        };

        resolve::has_transition(&self.table, &current)
            && self.table.conditions_met(object, &current)
    }
}

impl<O, S: State> fmt::Debug for TransitionTag<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTag")
            .field("behavior", &self.behavior())
            .field("holder", &self.holder)
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use crate::storage::{FieldOptions, FieldStore, StateField};

    struct Lamp {
        state: StateField<String>,
        wired: bool,
    }

    fn lamp(state: &str, wired: bool) -> Lamp {
        Lamp {
            state: StateField::with_state(state, FieldOptions::default()),
            wired,
        }
    }

    fn store(name: &str) -> Arc<dyn StateStore<Lamp, String>> {
        Arc::new(FieldStore::new(
            name,
            |l: &Lamp| &l.state,
            |l: &mut Lamp| &mut l.state,
        ))
    }

    fn switch_on() -> TransitionTag<Lamp, String> {
        let mut table = TransitionTable::new("switch_on");
        table
            .add_transition(
                "off".into(),
                "on".into(),
                vec![Guard::new(|l: &Lamp| l.wired)],
                None,
            )
            .unwrap();
        TransitionTag::new(table, "state")
    }

    #[test]
    fn new_tag_is_unbound() {
        let tag = switch_on();
        assert!(!tag.is_bound());
        assert_eq!(tag.holder(), "state");
        assert!(!tag.can_proceed(&lamp("off", true)));
    }

    #[test]
    fn binding_happens_once() {
        let tag = switch_on();
        let signal = Arc::new(Signal::new());

        tag.bind(store("state"), Arc::clone(&signal)).unwrap();
        assert!(tag.is_bound());

        assert_eq!(
            tag.bind(store("state"), signal),
            Err(BindError::AlreadyBound {
                behavior: "switch_on".to_string()
            })
        );
    }

    #[test]
    fn binding_checks_holder_name() {
        let tag = switch_on();
        let result = tag.bind(store("power"), Arc::new(Signal::new()));

        assert!(matches!(result, Err(BindError::HolderMismatch { .. })));
        assert!(!tag.is_bound());
    }

    #[test]
    fn can_proceed_checks_source_and_guards() {
        let tag = switch_on();
        tag.bind(store("state"), Arc::new(Signal::new())).unwrap();

        assert!(tag.can_proceed(&lamp("off", true)));
        assert!(!tag.can_proceed(&lamp("off", false)));
        assert!(!tag.can_proceed(&lamp("on", true)));
    }
}
