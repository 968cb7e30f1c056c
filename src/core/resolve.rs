//! Pure matching of a current state against a table's sources.
//!
//! Lookup order is significant: an exact source always wins over a wildcard,
//! and `*` is tried before `+`.

use super::source::Source;
use super::state::State;
use super::table::{TransitionSpec, TransitionTable};

/// Find the rule that applies to `current`, if any.
///
/// The `+` rule is returned even when its destination equals `current`;
/// use [`has_transition`] to decide whether that rule is eligible.
pub fn resolve<'t, O, S: State>(
    table: &'t TransitionTable<O, S>,
    current: &S,
) -> Option<&'t TransitionSpec<O, S>> {
    table
        .spec_for(&Source::Exact(current.clone()))
        .or_else(|| table.spec_for(&Source::Any))
        .or_else(|| table.spec_for(&Source::AnyOther))
}

/// Whether any rule can move an object out of `state`.
///
/// A `+` rule is ineligible when its literal destination is `state` itself.
/// Deferred (`ONE_OF`) and unchanged destinations never count as self-loops
/// here.
pub fn has_transition<O, S: State>(table: &TransitionTable<O, S>, state: &S) -> bool {
    if table.spec_for(&Source::Exact(state.clone())).is_some() {
        return true;
    }

    if table.spec_for(&Source::Any).is_some() {
        return true;
    }

    table
        .spec_for(&Source::AnyOther)
        .is_some_and(|spec| spec.destination.state() != Some(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Destination, OneOf};

    struct Doc;

    fn table(rules: &[(&str, Destination<String>)]) -> TransitionTable<Doc, String> {
        let mut table = TransitionTable::new("act");
        for (source, destination) in rules {
            table
                .add_transition(Source::from(*source), destination.clone(), Vec::new(), None)
                .unwrap();
        }
        table
    }

    fn to(state: &str) -> Destination<String> {
        Destination::State(state.to_string())
    }

    #[test]
    fn exact_match_wins_over_wildcards() {
        let table = table(&[("draft", to("published")), ("*", to("archived"))]);
        let spec = resolve(&table, &"draft".to_string()).unwrap();
        assert_eq!(spec.destination, to("published"));
    }

    #[test]
    fn star_is_tried_before_plus() {
        let table = table(&[("+", to("a")), ("*", to("b"))]);
        let spec = resolve(&table, &"x".to_string()).unwrap();
        assert_eq!(spec.source, Source::Any);
    }

    #[test]
    fn no_match_yields_none() {
        let table = table(&[("draft", to("published"))]);
        assert!(resolve(&table, &"published".to_string()).is_none());
        assert!(!has_transition(&table, &"published".to_string()));
    }

    #[test]
    fn plus_excludes_self_transition() {
        let table = table(&[("+", to("closed"))]);
        assert!(has_transition(&table, &"open".to_string()));
        assert!(!has_transition(&table, &"closed".to_string()));
    }

    #[test]
    fn plus_with_deferred_destination_is_always_eligible() {
        let selector = OneOf::new(["closed", "open"]).unwrap();
        let table = table(&[("+", Destination::OneOf(selector))]);
        assert!(has_transition(&table, &"closed".to_string()));
    }

    #[test]
    fn star_allows_self_transition() {
        let table = table(&[("*", to("closed"))]);
        assert!(has_transition(&table, &"closed".to_string()));
    }
}
