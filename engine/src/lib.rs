//! March Neighborhood Pattern Engine
//!
//! Enumerates the distinct *neighborhood patterns* a March memory-test
//! algorithm can produce. Instead of simulating a memory array, every
//! sequence of the algorithm is replayed over a fixed 3x3 window of abstract
//! cells; each genuine value change snapshots the whole window, and the
//! distinct snapshots are collected in first-seen order.
//!
//! # Pipeline
//!
//! ```text
//! text ──parse──▶ [SequenceDescriptor] ──replay──▶ PatternRegistry ──emit──▶ report
//!                        │
//!                        └──write_trace──▶ (address, command) trace
//! ```
//!
//! # Cell states
//!
//! | State | Symbol | Meaning |
//! |-------|--------|---------|
//! | Idle | `i` | never written |
//! | Zero | `0` | settled at 0 |
//! | One | `1` | settled at 1 |
//! | TransitioningToZero | `D` | write to 0 in progress (snapshot only) |
//! | TransitioningToOne | `U` | write to 1 in progress (snapshot only) |
//!
//! # Example
//!
//! ```
//! use march_engine::{analyze, Cell, Position};
//!
//! // {↕(w0); ↑(r0,w1); ↓(r1)}
//! let analysis = analyze("awz,urzwi,dri").unwrap();
//! assert_eq!(analysis.registry.len(), 9);
//!
//! let first = analysis.registry.as_slice()[0];
//! assert_eq!(first.get(Position::from_index(0)), Cell::TransitioningToOne);
//! ```
//!
//! # Design Principles
//!
//! - **Deterministic**: the same text always yields the same patterns in the
//!   same order.
//! - **Bounded**: the registry holds at most [`REGISTRY_CAPACITY`] patterns
//!   and reports overflow as an error.
//! - **Lenient operations**: operation characters outside the alphabet are
//!   absorbed as no-ops, never rejected.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Parsing (direction, operations, sequence descriptors)
pub mod algorithm;

// Cell states and values
pub mod cell;

pub mod error;

// 3x3 window and snapshots
pub mod grid;

// Replay engine
pub mod machine;

// Bounded pattern collection
pub mod registry;

// Output
pub mod report;
pub mod trace;

pub use algorithm::{parse, Algorithm, Direction, Operation, SequenceDescriptor, Step};
pub use cell::{Bit, Cell};
pub use error::{Error, Result};
pub use grid::{Grid, Pattern, Position};
pub use machine::{discover_patterns, NeighborhoodMachine, ReplayObserver, ReplayStats, VisitLog};
pub use registry::{PatternRegistry, REGISTRY_CAPACITY};
pub use report::{emit, ReportFormat};

/// Result of analyzing one algorithm text.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The normalized algorithm and its sequences.
    pub algorithm: Algorithm,
    /// Distinct patterns in first-seen order.
    pub registry: PatternRegistry,
    /// Counters summed over all sequences.
    pub stats: ReplayStats,
}

impl Analysis {
    /// Replays a parsed algorithm from an all-idle window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryCapacityExceeded`] if the registry overflows.
    pub fn from_algorithm(algorithm: Algorithm) -> Result<Self> {
        let mut machine = NeighborhoodMachine::new();
        let stats = machine.run(&algorithm)?;
        Ok(Self {
            algorithm,
            registry: machine.into_registry(),
            stats,
        })
    }

    /// Writes the report for this analysis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Json`] if writing fails.
    pub fn emit<W: std::io::Write>(&self, out: &mut W, format: ReportFormat) -> Result<()> {
        emit(out, self.algorithm.text(), self.registry.as_slice(), format)
    }
}

/// Parses `text` and replays it from an all-idle window.
///
/// # Errors
///
/// Returns [`Error::MalformedAlgorithm`] if the text does not parse, or
/// [`Error::RegistryCapacityExceeded`] if the registry overflows.
pub fn analyze(text: &str) -> Result<Analysis> {
    Analysis::from_algorithm(Algorithm::parse(text)?)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    #[test]
    fn analyze_fixture() {
        let analysis = analyze("awz,urzwi,dri").unwrap();
        assert_eq!(analysis.algorithm.text(), "AWZ,URZWI,DRI");
        assert_eq!(analysis.registry.len(), 9);
        assert_eq!(analysis.stats.visits, 27);
        assert_eq!(analysis.stats.captures, 9);
    }

    #[test]
    fn from_algorithm_agrees_with_analyze() {
        let alg = Algorithm::parse("awzwi,dwzwi").unwrap();
        let direct = Analysis::from_algorithm(alg).unwrap();
        let parsed = analyze("awzwi,dwzwi").unwrap();
        assert_eq!(direct.algorithm, parsed.algorithm);
        assert_eq!(direct.registry.as_slice(), parsed.registry.as_slice());
        assert_eq!(direct.stats, parsed.stats);
    }

    #[test]
    fn analyze_rejects_malformed_text() {
        assert!(matches!(
            analyze(","),
            Err(Error::MalformedAlgorithm { .. })
        ));
    }

    #[test]
    fn analysis_emits_normalized_text() {
        let analysis = analyze("aw1,aw0").unwrap();
        let mut buf = Vec::new();
        analysis.emit(&mut buf, ReportFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Neighborhood patterns in AW1,AW0:\n\n9 patterns found\n"));
    }
}
