//! Pattern registry: bounded, deduplicated, insertion-ordered.
//!
//! The registry is append-only. A pattern is stored at most once; the order
//! in which distinct patterns were first seen is the only order it keeps.
//!
//! # Examples
//!
//! ```
//! use march_engine::{Grid, Pattern, PatternRegistry};
//!
//! let mut reg = PatternRegistry::new();
//! let p = Pattern::from(Grid::idle());
//! assert!(reg.insert_if_new(p).unwrap());
//! assert!(!reg.insert_if_new(p).unwrap());
//! assert_eq!(reg.len(), 1);
//! ```

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::grid::Pattern;

/// Fixed ceiling on distinct patterns. Overflowing it is an error, never a
/// silent drop.
pub const REGISTRY_CAPACITY: usize = 4608;

/// Distinct patterns in first-seen order.
#[derive(Clone, Debug)]
pub struct PatternRegistry {
    ordered: Vec<Pattern>,
    seen: HashSet<Pattern>,
    capacity: usize,
}

impl PatternRegistry {
    /// An empty registry with the standard capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(REGISTRY_CAPACITY)
    }

    /// An empty registry holding at most `capacity` patterns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ordered: Vec::new(),
            seen: HashSet::new(),
            capacity,
        }
    }

    /// True if a cell-wise equal pattern is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.seen.contains(pattern)
    }

    /// Appends `pattern` unless an equal one is already stored.
    ///
    /// Returns `Ok(true)` if it was appended, `Ok(false)` if it was a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryCapacityExceeded`] if the pattern is new and the
    /// registry is full. The registry is left unchanged.
    pub fn insert_if_new(&mut self, pattern: Pattern) -> Result<bool> {
        if self.contains(&pattern) {
            return Ok(false);
        }
        if self.ordered.len() >= self.capacity {
            return Err(Error::RegistryCapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.seen.insert(pattern);
        self.ordered.push(pattern);
        Ok(true)
    }

    /// Number of stored patterns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True if nothing has been stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Maximum number of patterns this registry accepts.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored patterns in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Pattern] {
        &self.ordered
    }

    /// Iterates stored patterns in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Pattern> {
        self.ordered.iter()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a Pattern;
    type IntoIter = core::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
