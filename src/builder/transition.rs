//! Builder for declaring transition behaviors.

use crate::core::{ConfigError, Destination, Guard, Source, State, TransitionTable};
use crate::engine::{SelectingTransition, Transition, TransitionTag};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Holder name used when a declaration does not name one.
pub const DEFAULT_HOLDER: &str = "state";

type Check = Validation<(), NonEmptyVec<ConfigError>>;

/// Fluent declaration of one transition behavior.
///
/// Every source registers its own rule sharing the destination, guards and
/// error fallback. With no source the rule applies from any state (`*`); with
/// no destination the state is left unchanged.
pub struct TransitionBuilder<O, S: State> {
    behavior: String,
    sources: Vec<Source<S>>,
    destination: Destination<S>,
    holder: String,
    on_error: Option<S>,
    guards: Vec<Guard<O>>,
}

impl<O, S: State> TransitionBuilder<O, S> {
    /// Start declaring the behavior called `behavior`.
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            sources: Vec::new(),
            destination: Destination::Unchanged,
            holder: DEFAULT_HOLDER.to_string(),
            on_error: None,
            guards: Vec::new(),
        }
    }

    /// Add a source: a state, `*` or `+`.
    pub fn source(mut self, source: impl Into<Source<S>>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Add several sources at once.
    pub fn sources<I, T>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Source<S>>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Set the destination: a state or a [`OneOf`](crate::core::OneOf).
    pub fn destination(mut self, destination: impl Into<Destination<S>>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Validate the transition without changing state (the default).
    pub fn unchanged(mut self) -> Self {
        self.destination = Destination::Unchanged;
        self
    }

    /// Name the state holder to bind against.
    pub fn holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = holder.into();
        self
    }

    /// State to commit if the behavior fails.
    pub fn on_error(mut self, state: impl Into<S>) -> Self {
        self.on_error = Some(state.into());
        self
    }

    /// Add a guard.
    pub fn guard(mut self, guard: Guard<O>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard from a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&O) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Build the tag alone, for callers that drive
    /// [`execute`](crate::engine::execute) themselves.
    pub fn tag(self) -> Result<TransitionTag<O, S>, ConfigError> {
        self.into_tag(Vec::new())
    }

    /// Wrap `behavior` so that every call runs as this transition.
    ///
    /// ONE_OF destinations are rejected here; they need
    /// [`build_selecting`](Self::build_selecting).
    pub fn build<F>(self, behavior: F) -> Result<Transition<O, S, F>, ConfigError> {
        let mut checks = Vec::new();
        if self.destination.is_deferred() {
            checks.push(Validation::fail(ConfigError::SelectorNeedsState {
                behavior: self.behavior.clone(),
            }));
        }

        let tag = self.into_tag(checks)?;
        Ok(Transition::new(tag, behavior))
    }

    /// Wrap a `behavior` that returns the state it chose.
    pub fn build_selecting<F>(
        self,
        behavior: F,
    ) -> Result<SelectingTransition<O, S, F>, ConfigError> {
        let tag = self.into_tag(Vec::new())?;
        Ok(SelectingTransition::new(tag, behavior))
    }

    fn into_tag(self, mut checks: Vec<Check>) -> Result<TransitionTag<O, S>, ConfigError> {
        let sources = if self.sources.is_empty() {
            vec![Source::Any]
        } else {
            self.sources
        };

        let mut table = TransitionTable::new(self.behavior);
        for source in sources {
            let check = match table.add_transition(
                source,
                self.destination.clone(),
                self.guards.clone(),
                self.on_error.clone(),
            ) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(error),
            };
            checks.push(check);
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(TransitionTag::new(table, self.holder)),
            Validation::Failure(errors) => {
                Err(ConfigError::combine(errors.iter().cloned().collect()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{resolve, OneOf};
    use std::convert::Infallible;

    struct Parcel {
        weighed: bool,
    }

    fn builder(name: &str) -> TransitionBuilder<Parcel, String> {
        TransitionBuilder::new(name)
    }

    fn noop(_: &mut Parcel, _: ()) -> Result<(), Infallible> {
        Ok(())
    }

    #[test]
    fn defaults_to_any_source_and_unchanged_state() {
        let tag = builder("inspect").tag().unwrap();

        assert_eq!(tag.holder(), DEFAULT_HOLDER);
        let spec = tag.table().spec_for(&Source::Any).unwrap();
        assert_eq!(spec.destination, Destination::Unchanged);
        assert_eq!(spec.error_fallback, None);
    }

    #[test]
    fn every_source_gets_its_own_rule() {
        let tag = builder("ship")
            .sources(["packed", "weighed"])
            .destination("shipped")
            .on_error("lost")
            .when(|p: &Parcel| p.weighed)
            .tag()
            .unwrap();

        let table = tag.table();
        assert_eq!(table.len(), 2);
        for source in ["packed", "weighed"] {
            let spec = resolve(table, &source.to_string()).unwrap();
            assert_eq!(spec.destination, Destination::State("shipped".to_string()));
            assert_eq!(spec.error_fallback.as_deref(), Some("lost"));
            assert_eq!(spec.guards.len(), 1);
        }
    }

    #[test]
    fn duplicate_sources_in_one_declaration_fail() {
        let result = builder("ship")
            .sources(["packed", "packed"])
            .destination("shipped")
            .tag();

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateSource { ref state, .. }) if state == "packed"
        ));
    }

    #[test]
    fn all_problems_are_reported_together() {
        let selector = OneOf::new(["shipped", "returned"]).unwrap();
        let result = builder("ship")
            .source("packed")
            .source("packed")
            .destination(selector)
            .build(noop);

        let error = result.unwrap_err();
        assert_eq!(error.errors().len(), 2);
        assert!(error
            .errors()
            .iter()
            .any(|e| matches!(e, ConfigError::SelectorNeedsState { .. })));
    }

    #[test]
    fn selecting_build_accepts_one_of() {
        let selector = OneOf::new(["shipped", "returned"]).unwrap();
        let transition = builder("deliver")
            .source("shipped")
            .destination(selector)
            .build_selecting(|_: &mut Parcel, _: ()| Ok::<_, Infallible>("returned".to_string()));

        assert!(transition.is_ok());
    }

    #[test]
    fn holder_name_is_kept() {
        let transition = builder("weigh")
            .source("packed")
            .unchanged()
            .holder("status")
            .build(noop)
            .unwrap();

        assert_eq!(transition.tag().holder(), "status");
        assert_eq!(transition.name(), "weigh");
    }
}
