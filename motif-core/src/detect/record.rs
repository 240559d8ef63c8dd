//! Match records returned by the detectors.
//!
//! Records own copies of whatever values they report; nothing borrows from
//! the pattern or the sequence.

use crate::arith::Arithmetic;
use crate::error::Result;

/// A window whose values are the pattern's shifted by a constant offset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transposition<V> {
    pub position: usize,
    /// `value(window[0]) - value(pattern[0])`; zero for a plain repetition
    pub offset: V,
}

/// Reflection axis, stored doubled so integer values reflecting about a
/// half step stay exact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis<V> {
    twice: V,
}

impl<V> Axis<V> {
    /// Axis whose doubled value is `twice`
    pub fn from_twice(twice: V) -> Self {
        Self { twice }
    }

    /// `2 * axis`
    pub fn twice(&self) -> &V {
        &self.twice
    }
}

impl<V: Arithmetic> Axis<V> {
    /// The axis as a number, e.g. `61.5` for a reflection between 61 and 62
    pub fn to_f64(&self) -> Option<f64> {
        self.twice.to_f64().map(|t| t / 2.0)
    }

    /// Mirror image `2 * axis - value`
    pub fn reflect(&self, value: &V) -> Result<V> {
        self.twice.try_sub(value)
    }
}

/// A window that mirrors the pattern about an axis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inversion<V> {
    pub position: usize,
    pub axis: Axis<V>,
}

/// One differing index of a local change
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diff<T> {
    /// Index into the pattern (and into the window)
    pub index: usize,
    /// Value in the pattern
    pub expected: T,
    /// Value found in the sequence
    pub found: T,
}

/// A window equal to the pattern except for a few differing indices
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalChange<T> {
    pub position: usize,
    /// Never empty, ordered by index
    pub diffs: Vec<Diff<T>>,
}

impl<T> LocalChange<T> {
    pub fn changed_indices(&self) -> Vec<usize> {
        self.diffs.iter().map(|d| d.index).collect()
    }
}

/// A window equal to the pattern with some of its elements deleted
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragmentation {
    pub position: usize,
    /// Always shorter than the pattern
    pub window_length: usize,
    /// Pattern indices missing from this instance, ascending
    pub deleted_indices: Vec<usize>,
}

impl Fragmentation {
    /// Pattern indices that do appear in the window, in order
    pub fn kept_indices(&self, pattern_len: usize) -> Vec<usize> {
        (0..pattern_len)
            .filter(|i| self.deleted_indices.binary_search(i).is_err())
            .collect()
    }
}

/// A window containing the whole pattern with extra items interleaved
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    pub position: usize,
    /// Always longer than the pattern
    pub window_length: usize,
    /// Window-relative indices of the inserted items, ascending
    pub inserted_indices: Vec<usize>,
}

impl Extension {
    /// Window-relative indices realizing the pattern, in pattern order
    pub fn matched_indices(&self) -> Vec<usize> {
        (0..self.window_length)
            .filter(|i| self.inserted_indices.binary_search(i).is_err())
            .collect()
    }
}
