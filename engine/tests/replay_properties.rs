//! Property-based tests for the replay engine.
//!
//! Algorithms are generated from a small alphabet that mixes directions,
//! commands, both value spellings, and characters outside the alphabet.

#![allow(clippy::unwrap_used)]

use march_engine::{
    analyze, Algorithm, Cell, NeighborhoodMachine, Position, SequenceDescriptor, VisitLog,
    REGISTRY_CAPACITY,
};
use proptest::prelude::*;

const ALGORITHM: &str = "[uadUAD][wrzWRZi01#]{1,6}(,[uadUAD][wrzWRZi01#]{1,6}){0,5}";

// =============================================================================
// Registry invariants
// =============================================================================

proptest! {
    /// No two stored patterns are equal.
    #[test]
    fn prop_patterns_are_unique(text in ALGORITHM) {
        let analysis = analyze(&text).unwrap();
        let patterns = analysis.registry.as_slice();
        for (i, a) in patterns.iter().enumerate() {
            for b in &patterns[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// The registry never exceeds its capacity and every pattern carries
    /// exactly one transient marker.
    #[test]
    fn prop_patterns_are_bounded_and_single_marker(text in ALGORITHM) {
        let analysis = analyze(&text).unwrap();
        prop_assert!(analysis.registry.len() <= REGISTRY_CAPACITY);
        for pattern in &analysis.registry {
            let markers = (0..9)
                .filter(|&i| pattern.get(Position::from_index(i)).is_transient())
                .count();
            prop_assert_eq!(markers, 1);
        }
    }

    /// New patterns never outnumber captures, and captures never outnumber
    /// transitions.
    #[test]
    fn prop_stats_are_consistent(text in ALGORITHM) {
        let analysis = analyze(&text).unwrap();
        let stats = analysis.stats;
        prop_assert_eq!(stats.new_patterns, analysis.registry.len());
        prop_assert!(stats.new_patterns <= stats.captures);
        prop_assert!(stats.captures <= stats.transitions);
        prop_assert!(stats.transitions <= stats.writes);
        prop_assert_eq!(stats.visits, 9 * analysis.algorithm.sequences().len());
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Independent runs over the same text agree exactly, order included.
    #[test]
    fn prop_replay_is_deterministic(text in ALGORITHM) {
        let first = analyze(&text).unwrap();
        let second = analyze(&text).unwrap();
        prop_assert_eq!(first.registry.as_slice(), second.registry.as_slice());
    }

    /// Case does not matter.
    #[test]
    fn prop_case_insensitive(text in ALGORITHM) {
        let lower = analyze(&text.to_lowercase()).unwrap();
        let upper = analyze(&text.to_uppercase()).unwrap();
        prop_assert_eq!(lower.registry.as_slice(), upper.registry.as_slice());
    }
}

// =============================================================================
// Visiting order
// =============================================================================

proptest! {
    /// Down visits the nine positions in exactly the reverse of Up and Either.
    #[test]
    fn prop_down_reverses_up(ops in "[rR]{1,5}") {
        let mut machine = NeighborhoodMachine::new();
        let mut logs = Vec::new();
        for dir in ["U", "A", "D"] {
            let seq: SequenceDescriptor = format!("{dir}{ops}").parse().unwrap();
            let mut log = VisitLog::default();
            machine.replay_observed(&seq, &mut log).unwrap();
            logs.push(log.visits);
        }
        prop_assert_eq!(&logs[0], &logs[1]);
        let mut down = logs[2].clone();
        down.reverse();
        prop_assert_eq!(&logs[0], &down);
        // Read-only sequences leave the window idle.
        prop_assert!(machine.registry().is_empty());
        prop_assert_eq!(machine.grid().get(Position::from_index(4)), Cell::Idle);
    }

    /// A single write per position from the idle window never captures.
    #[test]
    fn prop_first_write_is_exempt(dir in "[uad]", value in "[a-z0-9]") {
        let alg = Algorithm::parse(&format!("{dir}w{value}")).unwrap();
        let mut machine = NeighborhoodMachine::new();
        let stats = machine.run(&alg).unwrap();
        prop_assert_eq!(stats.transitions, 9);
        prop_assert_eq!(stats.captures, 0);
        prop_assert!(machine.registry().is_empty());
    }
}
