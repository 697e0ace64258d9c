//! Cell states of the neighborhood window.
//!
//! A cell starts [`Cell::Idle`] and settles on [`Cell::Zero`] or [`Cell::One`]
//! once written. The two transient markers only ever appear inside a captured
//! [`Pattern`](crate::Pattern); the live grid never holds them.

use core::fmt;

use serde::Serialize;

/// A logical value written to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    /// Logical zero.
    Zero,
    /// Logical one.
    One,
}

impl Bit {
    /// Decodes a (normalized, upper-case) value character.
    ///
    /// `Z` and `0` mean zero. Any other letter or digit means one, so every
    /// sequence can pick its own letter for one. Anything else is outside the
    /// value alphabet and yields `None`.
    ///
    /// ```
    /// use march_engine::Bit;
    ///
    /// assert_eq!(Bit::from_symbol('Z'), Some(Bit::Zero));
    /// assert_eq!(Bit::from_symbol('I'), Some(Bit::One));
    /// assert_eq!(Bit::from_symbol('#'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'Z' | '0' => Some(Self::Zero),
            c if c.is_ascii_alphanumeric() => Some(Self::One),
            _ => None,
        }
    }

    /// The settled cell state holding this value.
    #[inline]
    #[must_use]
    pub const fn settled(self) -> Cell {
        match self {
            Self::Zero => Cell::Zero,
            Self::One => Cell::One,
        }
    }

    /// The transient marker for a write that moves a cell to this value.
    #[inline]
    #[must_use]
    pub const fn transient(self) -> Cell {
        match self {
            Self::Zero => Cell::TransitioningToZero,
            Self::One => Cell::TransitioningToOne,
        }
    }
}

/// State of one cell in the 3x3 neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    /// Never written.
    #[default]
    #[serde(rename = "i")]
    Idle,
    /// Settled at zero.
    #[serde(rename = "0")]
    Zero,
    /// Settled at one.
    #[serde(rename = "1")]
    One,
    /// A write to zero is in progress (snapshot only).
    #[serde(rename = "D")]
    TransitioningToZero,
    /// A write to one is in progress (snapshot only).
    #[serde(rename = "U")]
    TransitioningToOne,
}

impl Cell {
    /// Single-character rendering used by the reports.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Idle => 'i',
            Self::Zero => '0',
            Self::One => '1',
            Self::TransitioningToZero => 'D',
            Self::TransitioningToOne => 'U',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'i' => Some(Self::Idle),
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            'D' => Some(Self::TransitioningToZero),
            'U' => Some(Self::TransitioningToOne),
            _ => None,
        }
    }

    /// True for the two transient markers.
    #[inline]
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::TransitioningToZero | Self::TransitioningToOne)
    }

    /// True if the cell currently holds `bit` as its settled value.
    #[inline]
    #[must_use]
    pub fn holds(self, bit: Bit) -> bool {
        self == bit.settled()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
