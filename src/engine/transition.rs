//! Behaviors wrapped so that every call runs through the engine.

use super::error::TransitionError;
use super::executor;
use super::tag::TransitionTag;
use crate::core::State;
use std::error::Error;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// A behavior whose calls are validated and committed as a transition.
///
/// Built by [`TransitionBuilder::build`](crate::builder::TransitionBuilder::build).
pub struct Transition<O, S: State, F> {
    tag: Arc<TransitionTag<O, S>>,
    behavior: F,
}

impl<O, S: State, F> Transition<O, S, F> {
    pub(crate) fn new(tag: TransitionTag<O, S>, behavior: F) -> Self {
        Self {
            tag: Arc::new(tag),
            behavior,
        }
    }

    /// The tag, for registering with a [`Registry`](super::Registry).
    pub fn tag(&self) -> &Arc<TransitionTag<O, S>> {
        &self.tag
    }

    pub fn name(&self) -> &str {
        self.tag.behavior()
    }

    /// Whether a call right now would pass the source and guard checks.
    pub fn can_proceed(&self, object: &O) -> bool {
        self.tag.can_proceed(object)
    }

    /// Invoke the behavior as a transition of `object`.
    pub fn call<A, R, E>(&self, object: &mut O, args: A) -> Result<R, TransitionError<E>>
    where
        A: Debug,
        F: Fn(&mut O, A) -> Result<R, E>,
        E: Error + 'static,
    {
        executor::execute(&self.tag, object, &self.behavior, args)
    }
}

/// A behavior that picks its destination by returning a state.
///
/// Built by
/// [`TransitionBuilder::build_selecting`](crate::builder::TransitionBuilder::build_selecting).
pub struct SelectingTransition<O, S: State, F> {
    tag: Arc<TransitionTag<O, S>>,
    behavior: F,
}

impl<O, S: State, F> SelectingTransition<O, S, F> {
    pub(crate) fn new(tag: TransitionTag<O, S>, behavior: F) -> Self {
        Self {
            tag: Arc::new(tag),
            behavior,
        }
    }

    pub fn tag(&self) -> &Arc<TransitionTag<O, S>> {
        &self.tag
    }

    pub fn name(&self) -> &str {
        self.tag.behavior()
    }

    pub fn can_proceed(&self, object: &O) -> bool {
        self.tag.can_proceed(object)
    }

    /// Invoke the behavior; the state it returns becomes the destination.
    pub fn call<A, E>(&self, object: &mut O, args: A) -> Result<S, TransitionError<E>>
    where
        A: Debug,
        F: Fn(&mut O, A) -> Result<S, E>,
        E: Error + 'static,
    {
        executor::execute_selecting(&self.tag, object, &self.behavior, args)
    }
}

impl<O, S: State, F> fmt::Debug for Transition<O, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transition").field(&self.tag).finish()
    }
}

impl<O, S: State, F> fmt::Debug for SelectingTransition<O, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SelectingTransition").field(&self.tag).finish()
    }
}
