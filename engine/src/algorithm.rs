//! March algorithm text and its parsed form.
//!
//! # Grammar
//!
//! ```text
//! algorithm := sequence (',' sequence)*
//! sequence  := direction op+
//! direction := 'U' | 'A' | 'D'          (case-insensitive)
//! op        := any character
//! ```
//!
//! Input is upper-cased before tokenizing. `U` (ascending) and `A` (either)
//! sweep addresses bottom to top; `D` sweeps top to bottom.
//!
//! Operations are decoded as overlapping adjacent pairs: `W` followed by a
//! value character is a write of that value, `R` starts a read, and every
//! other pair is inert. So `RZWI` is a read of zero followed by a write of
//! one, and `WWZ` writes one and then zero.
//!
//! # Example
//!
//! ```
//! use march_engine::{Algorithm, Direction};
//!
//! let alg = Algorithm::parse("awz,urzwi,dri").unwrap();
//! assert_eq!(alg.text(), "AWZ,URZWI,DRI");
//! let dirs: Vec<_> = alg.sequences().iter().map(|s| s.direction()).collect();
//! assert_eq!(dirs, [Direction::Either, Direction::Up, Direction::Down]);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::cell::Bit;
use crate::error::{Error, Result};
use crate::grid::{Position, CELLS};

/// Separator between sequences.
pub const SEQUENCE_SEPARATOR: char = ',';

/// Sweep direction of one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending addresses (`U`, ↑).
    Up,
    /// Descending addresses (`D`, ↓).
    Down,
    /// Either order (`A`, ↕). Replayed exactly like [`Direction::Up`].
    Either,
}

impl Direction {
    /// Decodes a normalized direction character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDirection`] for anything other than `U`, `A`, `D`.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'U' => Ok(Self::Up),
            'A' => Ok(Self::Either),
            'D' => Ok(Self::Down),
            other => Err(Error::InvalidDirection { symbol: other }),
        }
    }

    /// The canonical direction character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Either => 'A',
            Self::Down => 'D',
        }
    }

    /// True if this direction visits slots in descending order.
    #[inline]
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Down)
    }

    /// The nine window positions in the order this direction visits them.
    ///
    /// Up and Either go row-major ascending; Down is the exact reverse.
    #[must_use]
    pub fn visit_order(self) -> [Position; CELLS] {
        core::array::from_fn(|i| {
            if self.is_descending() {
                Position::from_index(CELLS - 1 - i)
            } else {
                Position::from_index(i)
            }
        })
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_symbol(symbol)
    }
}

/// One operation character of a sequence, already normalized to upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operation(char);

impl Operation {
    /// Write command character.
    pub const WRITE: char = 'W';
    /// Read command character.
    pub const READ: char = 'R';

    /// Wraps a character, upper-casing it.
    #[must_use]
    pub fn new(symbol: char) -> Self {
        Self(symbol.to_ascii_uppercase())
    }

    /// The operation character.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// True for the write command.
    #[inline]
    #[must_use]
    pub const fn is_write(self) -> bool {
        self.0 == Self::WRITE
    }

    /// True for the read command.
    #[inline]
    #[must_use]
    pub const fn is_read(self) -> bool {
        self.0 == Self::READ
    }

    /// The value this character denotes when it follows a command.
    #[inline]
    #[must_use]
    pub fn value(self) -> Option<Bit> {
        Bit::from_symbol(self.0)
    }
}

/// A decoded step of a sequence, as applied at every visited position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Write the given value.
    Write(Bit),
    /// Read the current value. Never changes state.
    Read,
    /// A write whose target character is outside the value alphabet.
    /// Absorbed as a no-op.
    Ignored(char),
}

/// A parsed sequence: a sweep direction and its operations.
///
/// Invariant: `operations` is non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SequenceDescriptor {
    direction: Direction,
    operations: Vec<Operation>,
}

impl SequenceDescriptor {
    /// Builds a descriptor from parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedAlgorithm`] if `operations` is empty.
    pub fn new(direction: Direction, operations: Vec<Operation>) -> Result<Self> {
        if operations.is_empty() {
            return Err(Error::MalformedAlgorithm {
                token: direction.symbol().to_string(),
                reason: "has no operations",
            });
        }
        Ok(Self {
            direction,
            operations,
        })
    }

    /// Sweep direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Operations in written order.
    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Decodes the operation list into the steps applied at each position.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.operations.windows(2).filter_map(|pair| {
            let (command, operand) = (pair[0], pair[1]);
            if command.is_write() {
                Some(match operand.value() {
                    Some(bit) => Step::Write(bit),
                    None => Step::Ignored(operand.symbol()),
                })
            } else if command.is_read() {
                Some(Step::Read)
            } else {
                None
            }
        })
    }
}

impl FromStr for SequenceDescriptor {
    type Err = Error;

    /// Parses one sequence token such as `URZWI`.
    fn from_str(token: &str) -> Result<Self> {
        let token = token.to_ascii_uppercase();
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return Err(Error::MalformedAlgorithm {
                token,
                reason: "is empty",
            });
        };
        let direction = Direction::from_symbol(first).map_err(|_| Error::MalformedAlgorithm {
            token: token.clone(),
            reason: "does not start with a direction (U, A, D)",
        })?;
        let operations: Vec<Operation> = chars.map(Operation::new).collect();
        if operations.is_empty() {
            return Err(Error::MalformedAlgorithm {
                token,
                reason: "has no operations",
            });
        }
        Ok(Self {
            direction,
            operations,
        })
    }
}

impl fmt::Display for SequenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction.symbol())?;
        for op in &self.operations {
            write!(f, "{}", op.symbol())?;
        }
        Ok(())
    }
}

/// A normalized algorithm text together with its parsed sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Algorithm {
    text: String,
    sequences: Vec<SequenceDescriptor>,
}

impl Algorithm {
    /// Normalizes and parses algorithm text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedAlgorithm`] if any sequence is empty, has no
    /// operations, or does not start with a direction character.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim().to_ascii_uppercase();
        let sequences = text
            .split(SEQUENCE_SEPARATOR)
            .map(str::parse::<SequenceDescriptor>)
            .collect::<Result<Vec<SequenceDescriptor>>>()?;
        Ok(Self { text, sequences })
    }

    /// The algorithm text after case normalization.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed sequences in order.
    #[inline]
    #[must_use]
    pub fn sequences(&self) -> &[SequenceDescriptor] {
        &self.sequences
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

/// Parses algorithm text into its ordered sequence descriptors.
///
/// # Errors
///
/// Returns [`Error::MalformedAlgorithm`]; see [`Algorithm::parse`].
pub fn parse(text: &str) -> Result<Vec<SequenceDescriptor>> {
    Algorithm::parse(text).map(|alg| alg.sequences)
}
