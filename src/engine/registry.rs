//! Explicit binding of declared transitions to their state stores.
//!
//! Declarations name their state holder; the registry resolves those names
//! once every declaration for a type is known. Nothing is bound implicitly.

use super::error::BindError;
use super::tag::TransitionTag;
use crate::core::State;
use crate::notify::Signal;
use crate::storage::StateStore;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Stores, tags and the shared signal for one type of acting object.
///
/// ```rust
/// use tagged_fsm::builder::TransitionBuilder;
/// use tagged_fsm::engine::Registry;
/// use tagged_fsm::storage::{FieldOptions, FieldStore, StateField};
/// use std::convert::Infallible;
///
/// struct Door {
///     state: StateField<String>,
/// }
///
/// let open = TransitionBuilder::<Door, String>::new("open")
///     .source("closed")
///     .destination("open")
///     .build(|_: &mut Door, _: ()| Ok::<_, Infallible>(()))
///     .unwrap();
///
/// let mut registry = Registry::new();
/// registry.store(FieldStore::new("state", |d: &Door| &d.state, |d: &mut Door| &mut d.state));
/// registry.register(open.tag());
/// registry.bind().unwrap();
///
/// let mut door = Door { state: StateField::with_state("closed", FieldOptions::default()) };
/// assert_eq!(registry.available_transitions(&door), vec!["open"]);
/// open.call(&mut door, ()).unwrap();
/// assert_eq!(door.state.get().unwrap(), "open");
/// ```
pub struct Registry<O, S: State> {
    stores: HashMap<String, Arc<dyn StateStore<O, S>>>,
    signal: Arc<Signal<O, S>>,
    tags: Vec<Arc<TransitionTag<O, S>>>,
}

impl<O, S: State> Registry<O, S> {
    pub fn new() -> Self {
        Self::with_signal(Arc::new(Signal::new()))
    }

    /// Use an existing signal for every tag bound by this registry.
    pub fn with_signal(signal: Arc<Signal<O, S>>) -> Self {
        Self {
            stores: HashMap::new(),
            signal,
            tags: Vec::new(),
        }
    }

    pub fn signal(&self) -> &Arc<Signal<O, S>> {
        &self.signal
    }

    /// Register a store under its own name, replacing any previous one.
    pub fn store<T>(&mut self, store: T) -> &mut Self
    where
        T: StateStore<O, S> + 'static,
    {
        self.stores.insert(store.name().to_string(), Arc::new(store));
        self
    }

    /// Register a declared transition's tag for the next [`bind`](Self::bind).
    pub fn register(&mut self, tag: &Arc<TransitionTag<O, S>>) -> &mut Self {
        if !self.tags.iter().any(|known| Arc::ptr_eq(known, tag)) {
            self.tags.push(Arc::clone(tag));
        }
        self
    }

    pub fn tags(&self) -> impl Iterator<Item = &Arc<TransitionTag<O, S>>> {
        self.tags.iter()
    }

    /// Bind every registered tag that is not bound yet.
    ///
    /// All holder names are checked before anything is bound, so a failure
    /// leaves every tag as it was. Tags bound elsewhere in the meantime are
    /// skipped. Returns how many tags this call bound.
    pub fn bind(&self) -> Result<usize, BindError> {
        let pending: Vec<&Arc<TransitionTag<O, S>>> =
            self.tags.iter().filter(|tag| !tag.is_bound()).collect();

        let unknown: Vec<BindError> = pending
            .iter()
            .filter(|tag| !self.stores.contains_key(tag.holder()))
            .map(|tag| BindError::UnknownHolder {
                behavior: tag.behavior().to_string(),
                holder: tag.holder().to_string(),
            })
            .collect();
        if !unknown.is_empty() {
            return Err(BindError::combine(unknown));
        }

        let mut bound = 0;
        for tag in pending {
            let Some(store) = self.stores.get(tag.holder()) else {
                continue;
            };
            match tag.bind(Arc::clone(store), Arc::clone(&self.signal)) {
                Ok(()) => bound += 1,
                Err(BindError::AlreadyBound { .. }) => {}
                Err(error) => return Err(error),
            }
        }

        debug!(bound, total = self.tags.len(), "transitions bound");
        Ok(bound)
    }

    /// Behaviors that could fire for `object` in its current state.
    pub fn available_transitions(&self, object: &O) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|tag| tag.can_proceed(object))
            .map(|tag| tag.behavior())
            .collect()
    }
}

impl<O, S: State> Default for Registry<O, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S: State> fmt::Debug for Registry<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("stores", &self.stores.keys().collect::<Vec<_>>())
            .field("tags", &self.tags)
            .finish()
    }
}
