//! Neighborhood state machine.
//!
//! Replays sequence descriptors against one shared 3x3 [`Grid`] and feeds
//! the [`PatternRegistry`] with every snapshot a genuine value change exposes.
//!
//! # Transition rule
//!
//! For a write of `V` at a visited position:
//!
//! 1. If the cell already holds `V`, nothing happens.
//! 2. Otherwise, if the cell is not idle, the window is snapshotted with the
//!    cell shown as the transient marker for `V`, and the snapshot is offered
//!    to the registry.
//! 3. The cell settles on `V`.
//!
//! A first write from idle is not a disturbance and never captures. Reads
//! and writes to characters outside the value alphabet are no-ops.
//!
//! # Example
//!
//! ```
//! use march_engine::{Algorithm, NeighborhoodMachine};
//!
//! let alg = Algorithm::parse("aw1,aw0").unwrap();
//! let mut machine = NeighborhoodMachine::new();
//! machine.run(&alg).unwrap();
//! assert_eq!(machine.registry().len(), 9);
//! ```

use tracing::{debug, trace};

use crate::algorithm::{Algorithm, SequenceDescriptor, Step};
use crate::cell::{Bit, Cell};
use crate::error::Result;
use crate::grid::{Grid, Pattern, Position};
use crate::registry::PatternRegistry;

/// Hook for watching a replay as it happens.
///
/// Both methods default to doing nothing.
pub trait ReplayObserver {
    /// Called once per visited position, before its steps are applied.
    fn on_visit(&mut self, _pos: Position) {}

    /// Called for every captured snapshot. `inserted` is false for duplicates.
    fn on_capture(&mut self, _pattern: &Pattern, _inserted: bool) {}
}

impl ReplayObserver for () {}

/// Records visited positions in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitLog {
    /// Positions in visiting order.
    pub visits: Vec<Position>,
}

impl ReplayObserver for VisitLog {
    fn on_visit(&mut self, pos: Position) {
        self.visits.push(pos);
    }
}

/// Counters for one replayed sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Positions visited (always 9 per sequence).
    pub visits: usize,
    /// Write steps decoded, including no-op ones.
    pub writes: usize,
    /// Writes that changed a cell's value.
    pub transitions: usize,
    /// Snapshots taken (transitions from a non-idle cell).
    pub captures: usize,
    /// Snapshots that were new to the registry.
    pub new_patterns: usize,
    /// Writes whose target was outside the value alphabet.
    pub ignored: usize,
}

impl core::ops::AddAssign for ReplayStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visits += rhs.visits;
        self.writes += rhs.writes;
        self.transitions += rhs.transitions;
        self.captures += rhs.captures;
        self.new_patterns += rhs.new_patterns;
        self.ignored += rhs.ignored;
    }
}

/// The replay engine: one live grid plus the registry it accumulates into.
#[derive(Clone, Debug, Default)]
pub struct NeighborhoodMachine {
    grid: Grid,
    registry: PatternRegistry,
}

impl NeighborhoodMachine {
    /// An all-idle grid and an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::idle(),
            registry: PatternRegistry::new(),
        }
    }

    /// Starts from an existing registry, e.g. one with a custom capacity.
    #[must_use]
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            grid: Grid::idle(),
            registry,
        }
    }

    /// The live grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Patterns collected so far.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Consumes the machine, keeping only its registry.
    #[must_use]
    pub fn into_registry(self) -> PatternRegistry {
        self.registry
    }

    /// Replays every sequence of `algorithm` in order against the shared grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryCapacityExceeded`](crate::Error::RegistryCapacityExceeded)
    /// if the registry overflows. The run stops at that point.
    pub fn run(&mut self, algorithm: &Algorithm) -> Result<ReplayStats> {
        let mut total = ReplayStats::default();
        for (i, seq) in algorithm.sequences().iter().enumerate() {
            let stats = self.replay(seq)?;
            debug!(
                sequence = i,
                token = %seq,
                transitions = stats.transitions,
                captures = stats.captures,
                new_patterns = stats.new_patterns,
                ignored = stats.ignored,
                "sequence replayed"
            );
            total += stats;
        }
        debug!(patterns = self.registry.len(), "algorithm replayed");
        Ok(total)
    }

    /// Replays one sequence at all nine positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryCapacityExceeded`](crate::Error::RegistryCapacityExceeded)
    /// if the registry overflows.
    pub fn replay(&mut self, seq: &SequenceDescriptor) -> Result<ReplayStats> {
        self.replay_observed(seq, &mut ())
    }

    /// Like [`replay`](Self::replay), reporting visits and captures to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryCapacityExceeded`](crate::Error::RegistryCapacityExceeded)
    /// if the registry overflows.
    pub fn replay_observed<O: ReplayObserver + ?Sized>(
        &mut self,
        seq: &SequenceDescriptor,
        observer: &mut O,
    ) -> Result<ReplayStats> {
        let mut stats = ReplayStats::default();
        for pos in seq.direction().visit_order() {
            observer.on_visit(pos);
            stats.visits += 1;
            for step in seq.steps() {
                match step {
                    Step::Write(bit) => {
                        stats.writes += 1;
                        self.write(pos, bit, &mut stats, observer)?;
                    }
                    Step::Ignored(symbol) => {
                        stats.writes += 1;
                        stats.ignored += 1;
                        trace!(%pos, symbol = %symbol, "write target outside value alphabet ignored");
                    }
                    Step::Read => {}
                }
            }
        }
        Ok(stats)
    }

    fn write<O: ReplayObserver + ?Sized>(
        &mut self,
        pos: Position,
        bit: Bit,
        stats: &mut ReplayStats,
        observer: &mut O,
    ) -> Result<()> {
        let current = self.grid.get(pos);
        if current.holds(bit) {
            return Ok(());
        }
        stats.transitions += 1;
        if current != Cell::Idle {
            let pattern = self.grid.snapshot_with(pos, bit.transient());
            stats.captures += 1;
            let inserted = self.registry.insert_if_new(pattern)?;
            if inserted {
                stats.new_patterns += 1;
                trace!(%pos, index = self.registry.len() - 1, "new pattern captured");
            }
            observer.on_capture(&pattern, inserted);
        }
        self.grid.set(pos, bit.settled());
        Ok(())
    }
}

/// Replays `algorithm` from an idle grid and returns the collected registry.
///
/// # Errors
///
/// Returns [`Error::RegistryCapacityExceeded`](crate::Error::RegistryCapacityExceeded)
/// if the registry overflows.
pub fn discover_patterns(algorithm: &Algorithm) -> Result<PatternRegistry> {
    let mut machine = NeighborhoodMachine::new();
    machine.run(algorithm)?;
    Ok(machine.into_registry())
}
