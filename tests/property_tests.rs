//! Property-based tests for resolution and table construction.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables and states.

use proptest::prelude::*;
use std::collections::HashSet;
use tagged_fsm::core::{
    has_transition, resolve, ConfigError, Destination, Guard, Source, TransitionTable,
};
use tagged_fsm::notify::{OutcomeLog, Signal, TransitionOutcome};
use tagged_fsm::state_enum;

state_enum! {
    enum Stage {
        Draft,
        Review,
        Approved,
        Published,
        Archived,
    }
}

struct Item;

prop_compose! {
    fn arbitrary_stage()(variant in 0..5u8) -> Stage {
        match variant {
            0 => Stage::Draft,
            1 => Stage::Review,
            2 => Stage::Approved,
            3 => Stage::Published,
            _ => Stage::Archived,
        }
    }
}

fn arbitrary_source() -> impl Strategy<Value = Source<Stage>> {
    prop_oneof![
        3 => arbitrary_stage().prop_map(Source::Exact),
        1 => Just(Source::Any),
        1 => Just(Source::AnyOther),
    ]
}

fn arbitrary_destination() -> impl Strategy<Value = Destination<Stage>> {
    prop_oneof![
        3 => arbitrary_stage().prop_map(Destination::State),
        1 => Just(Destination::Unchanged),
    ]
}

prop_compose! {
    fn arbitrary_table()(
        rules in prop::collection::vec((arbitrary_source(), arbitrary_destination()), 0..8)
    ) -> TransitionTable<Item, Stage> {
        let mut table = TransitionTable::new("advance");
        for (source, destination) in rules {
            // Repeated sources are rejected; the first one wins.
            let _ = table.add_transition(source, destination, Vec::new(), None);
        }
        table
    }
}

fn destination_of<'t>(
    table: &'t TransitionTable<Item, Stage>,
    state: &Stage,
) -> Option<&'t Destination<Stage>> {
    resolve(table, state).map(|spec| &spec.destination)
}

proptest! {
    #[test]
    fn resolution_is_idempotent(table in arbitrary_table(), state in arbitrary_stage()) {
        prop_assert_eq!(destination_of(&table, &state), destination_of(&table, &state));
        prop_assert_eq!(has_transition(&table, &state), has_transition(&table, &state));
    }

    #[test]
    fn exact_source_wins_over_wildcards(
        state in arbitrary_stage(),
        exact in arbitrary_stage(),
        wildcard in arbitrary_stage(),
    ) {
        let mut table: TransitionTable<Item, Stage> = TransitionTable::new("advance");
        table.add_transition(Source::Any, wildcard.clone().into(), Vec::new(), None).unwrap();
        table.add_transition(Source::AnyOther, wildcard.into(), Vec::new(), None).unwrap();
        table.add_transition(state.clone().into(), exact.clone().into(), Vec::new(), None).unwrap();

        prop_assert_eq!(destination_of(&table, &state), Some(&Destination::State(exact)));
        prop_assert!(has_transition(&table, &state));
    }

    #[test]
    fn any_other_never_loops_back(target in arbitrary_stage(), state in arbitrary_stage()) {
        let mut table: TransitionTable<Item, Stage> = TransitionTable::new("reset");
        table.add_transition(Source::AnyOther, target.clone().into(), Vec::new(), None).unwrap();

        prop_assert_eq!(has_transition(&table, &state), state != target);
    }

    #[test]
    fn resolved_rule_implies_transition_unless_self_loop(
        table in arbitrary_table(),
        state in arbitrary_stage(),
    ) {
        match resolve(&table, &state) {
            None => prop_assert!(!has_transition(&table, &state)),
            Some(spec) if spec.source == Source::AnyOther => {
                let loops = spec.destination.state() == Some(&state);
                prop_assert_eq!(has_transition(&table, &state), !loops);
            }
            Some(_) => prop_assert!(has_transition(&table, &state)),
        }
    }

    #[test]
    fn duplicate_sources_are_always_rejected(
        source in arbitrary_source(),
        first in arbitrary_destination(),
        second in arbitrary_destination(),
    ) {
        let mut table: TransitionTable<Item, Stage> = TransitionTable::new("advance");
        table.add_transition(source.clone(), first, Vec::new(), None).unwrap();

        let duplicate = table.add_transition(source, second, Vec::new(), None);
        let is_duplicate = matches!(duplicate, Err(ConfigError::DuplicateSource { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn distinct_sources_are_always_accepted(
        sources in prop::collection::vec(arbitrary_source(), 0..10)
    ) {
        let mut seen = HashSet::new();
        let distinct: Vec<_> = sources.into_iter().filter(|s| seen.insert(s.clone())).collect();

        let mut table: TransitionTable<Item, Stage> = TransitionTable::new("advance");
        for source in &distinct {
            prop_assert!(table
                .add_transition(source.clone(), Destination::Unchanged, Vec::new(), None)
                .is_ok());
        }
        prop_assert_eq!(table.len(), distinct.len());
    }

    #[test]
    fn rejecting_guard_blocks_every_state(
        table in arbitrary_table(),
        state in arbitrary_stage(),
        source in arbitrary_source(),
    ) {
        let mut guarded: TransitionTable<Item, Stage> = TransitionTable::new("advance");
        for existing in table.sources() {
            let guards = if *existing == source {
                vec![Guard::new(|_: &Item| false)]
            } else {
                Vec::new()
            };
            guarded
                .add_transition(existing.clone(), Destination::Unchanged, guards, None)
                .unwrap();
        }

        let resolved = resolve(&guarded, &state).map(|spec| spec.source.clone());
        let expected = resolved.is_some_and(|matched| matched != source);
        prop_assert_eq!(guarded.conditions_met(&Item, &state), expected);
    }

    #[test]
    fn open_guards_follow_resolution(table in arbitrary_table(), state in arbitrary_stage()) {
        prop_assert_eq!(
            table.conditions_met(&Item, &state),
            resolve(&table, &state).is_some()
        );
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_stage()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Stage = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn outcome_log_preserves_order(
        stages in prop::collection::vec(arbitrary_stage(), 1..10)
    ) {
        let signal: Signal<Item, Stage> = Signal::new();
        let log = OutcomeLog::new();
        signal.connect(log.clone());

        let mut current = Stage::Draft;
        for next in &stages {
            signal.send(&TransitionOutcome {
                object: &Item,
                behavior: "advance",
                holder: "state",
                args: "()",
                source: current.clone(),
                destination: Some(next.clone()),
                error: None,
            });
            current = next.clone();
        }

        let mut expected = vec![Stage::Draft];
        expected.extend(stages);
        prop_assert_eq!(log.path(), expected);
    }
}
