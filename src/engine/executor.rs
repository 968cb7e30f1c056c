//! Orchestration of one transition attempt.
//!
//! ```text
//! Start -> GuardCheck -> Invoke -> Commit -> Notify -> Done
//!                          \
//!                           +-> ErrorFallback -> Notify -> (re-raise)
//! ```

use super::error::TransitionError;
use super::tag::{Binding, TransitionTag};
use crate::core::{resolve, Destination, State};
use crate::notify::TransitionOutcome;
use std::error::Error;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// Run `behavior` as the transition described by `tag`.
///
/// The behavior's return value is handed back on success. Destinations chosen
/// with ONE_OF need the returned state; use [`execute_selecting`] for those.
/// Observers see the `Debug` rendering of `args`.
pub fn execute<O, S, A, R, E, F>(
    tag: &TransitionTag<O, S>,
    object: &mut O,
    behavior: F,
    args: A,
) -> Result<R, TransitionError<E>>
where
    S: State,
    A: Debug,
    E: Error + 'static,
    F: FnOnce(&mut O, A) -> Result<R, E>,
{
    run(tag, object, behavior, args, None::<fn(&R) -> S>)
}

/// Like [`execute`], for behaviors that return the state they chose.
///
/// With a ONE_OF destination the returned state must be one of the allowed
/// states, otherwise the call fails with
/// [`TransitionError::InvalidResult`] and nothing is committed.
pub fn execute_selecting<O, S, A, E, F>(
    tag: &TransitionTag<O, S>,
    object: &mut O,
    behavior: F,
    args: A,
) -> Result<S, TransitionError<E>>
where
    S: State,
    A: Debug,
    E: Error + 'static,
    F: FnOnce(&mut O, A) -> Result<S, E>,
{
    run(tag, object, behavior, args, Some(|chosen: &S| chosen.clone()))
}

fn run<O, S, A, R, E, F, P>(
    tag: &TransitionTag<O, S>,
    object: &mut O,
    behavior: F,
    args: A,
    pick: Option<P>,
) -> Result<R, TransitionError<E>>
where
    S: State,
    A: Debug,
    E: Error + 'static,
    F: FnOnce(&mut O, A) -> Result<R, E>,
    P: FnOnce(&R) -> S,
{
    let name = tag.behavior();
    let binding = tag.binding().ok_or_else(|| TransitionError::Unbound {
        behavior: name.to_string(),
        holder: tag.holder().to_string(),
    })?;
    let table = tag.table();

    let current = binding.store.read(object)?;

    if !resolve::has_transition(table, &current) {
        return Err(TransitionError::NotAllowed {
            behavior: name.to_string(),
            state: current.name().to_string(),
        });
    }

    if !table.conditions_met(object, &current) {
        return Err(TransitionError::GuardsNotMet {
            behavior: name.to_string(),
            state: current.name().to_string(),
        });
    }

    let next = table
        .next_state(&current)
        .map_err(|missing| TransitionError::NotAllowed {
            behavior: missing.behavior,
            state: missing.state,
        })?;

    if next.is_deferred() && pick.is_none() {
        return Err(TransitionError::NeedsSelecting {
            behavior: name.to_string(),
        });
    }

    let rendered = format!("{args:?}");
    trace!(
        behavior = name,
        source = current.name(),
        next = %next,
        args = %rendered,
        "invoking transition"
    );

    match behavior(object, args) {
        Ok(result) => {
            let destination = match next {
                Destination::State(state) => Some(state.clone()),
                Destination::OneOf(selector) => {
                    let Some(chosen) = pick.map(|pick| pick(&result)) else {
                        return Err(TransitionError::NeedsSelecting {
                            behavior: name.to_string(),
                        });
                    };
                    let state = selector.get_state(&chosen).map_err(|cause| {
                        TransitionError::InvalidResult {
                            behavior: name.to_string(),
                            cause,
                        }
                    })?;
                    Some(state)
                }
                Destination::Unchanged => None,
            };

            if let Some(state) = &destination {
                binding.store.write(object, state.clone())?;
            }

            debug!(
                behavior = name,
                source = current.name(),
                destination = destination.as_ref().map(|state| state.name()),
                "transition committed"
            );

            publish(tag, binding, object, &rendered, current, destination, None);
            Ok(result)
        }
        Err(error) => {
            let fallback = table
                .error_fallback_state(&current)
                .ok()
                .flatten()
                .cloned();

            if let Some(state) = fallback {
                match binding.store.write(object, state.clone()) {
                    Ok(()) => {
                        debug!(
                            behavior = name,
                            source = current.name(),
                            fallback = state.name(),
                            error = %error,
                            "transition failed, error fallback committed"
                        );
                        publish(
                            tag,
                            binding,
                            object,
                            &rendered,
                            current,
                            Some(state),
                            Some(&error),
                        );
                    }
                    Err(storage) => warn!(
                        behavior = name,
                        source = current.name(),
                        fallback = state.name(),
                        error = %storage,
                        "could not commit error fallback state"
                    ),
                }
            }

            Err(TransitionError::Behavior(error))
        }
    }
}

fn publish<O, S: State>(
    tag: &TransitionTag<O, S>,
    binding: &Binding<O, S>,
    object: &O,
    args: &str,
    source: S,
    destination: Option<S>,
    error: Option<&(dyn Error + 'static)>,
) {
    let outcome = TransitionOutcome {
        object,
        behavior: tag.behavior(),
        holder: tag.holder(),
        args,
        source,
        destination,
        error,
    };
    binding.signal.send(&outcome);
}
