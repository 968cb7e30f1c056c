//! Guard predicates for gating transitions.
//!
//! A guard looks at the acting object (not just its state) and decides
//! whether a registered transition may proceed right now.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over the acting object that must hold for a transition.
///
/// Guards are evaluated before the wrapped behavior runs. They must not have
/// side effects that influence the transition decision; the engine may stop
/// evaluating at the first guard that fails.
///
/// Guards are cheap to clone: a declaration with several sources shares the
/// same guards across every registered rule.
///
/// # Example
///
/// ```rust
/// use tagged_fsm::core::Guard;
///
/// struct Article {
///     words: usize,
/// }
///
/// let long_enough = Guard::new(|a: &Article| a.words >= 100);
///
/// assert!(long_enough.check(&Article { words: 250 }));
/// assert!(!long_enough.check(&Article { words: 12 }));
/// ```
pub struct Guard<O> {
    predicate: Arc<dyn Fn(&O) -> bool + Send + Sync>,
}

impl<O> Guard<O> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&O) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether the guard allows the transition for this object.
    pub fn check(&self, object: &O) -> bool {
        (self.predicate)(object)
    }
}

impl<O> Clone for Guard<O> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<O> fmt::Debug for Guard<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

/// Check that every guard holds, stopping at the first that does not.
pub(crate) fn all_hold<O>(guards: &[Guard<O>], object: &O) -> bool {
    guards.iter().all(|guard| guard.check(object))
}
