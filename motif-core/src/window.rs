//! Window scanning shared by the detectors.
//!
//! A window is a contiguous slice of the sequence starting at `position`.
//! Every window handed out lies inside the sequence, so
//! `position + items.len() <= sequence.len()` always holds.

use crate::error::{Result, VariationError};

/// A contiguous slice of the sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a, I> {
    pub position: usize,
    pub items: &'a [I],
}

impl<'a, I> Window<'a, I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One past the last sequence index covered
    pub fn end(&self) -> usize {
        self.position + self.items.len()
    }
}

/// Enumerates candidate windows of a sequence for a given pattern.
///
/// Construction fails on an empty pattern, which is how every detector
/// reports [`VariationError::EmptyPattern`] before looking at the sequence.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a, I> {
    pattern: &'a [I],
    sequence: &'a [I],
}

impl<'a, I> Scanner<'a, I> {
    pub fn new(pattern: &'a [I], sequence: &'a [I]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(VariationError::EmptyPattern);
        }
        Ok(Self { pattern, sequence })
    }

    pub fn pattern(&self) -> &'a [I] {
        self.pattern
    }

    pub fn sequence(&self) -> &'a [I] {
        self.sequence
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Every window with the pattern's length, in ascending position.
    /// Empty when the sequence is shorter than the pattern.
    pub fn windows(&self) -> impl Iterator<Item = Window<'a, I>> + 'a {
        self.windows_of(self.pattern.len())
    }

    /// Every window of `len` items, in ascending position
    pub fn windows_of(&self, len: usize) -> impl Iterator<Item = Window<'a, I>> + 'a {
        let sequence = self.sequence;
        let count = if len == 0 {
            0
        } else {
            (sequence.len() + 1).saturating_sub(len)
        };
        (0..count).map(move |position| Window {
            position,
            items: &sequence[position..position + len],
        })
    }

    /// The window of `len` items at `position`, if it fits
    pub fn window_at(&self, position: usize, len: usize) -> Option<Window<'a, I>> {
        let end = position.checked_add(len)?;
        self.sequence.get(position..end).map(|items| Window { position, items })
    }

    /// Windows starting at `position` with lengths in `min..=max`, shortest
    /// first. Lengths past the end of the sequence are skipped.
    pub fn spans_at(
        &self,
        position: usize,
        min: usize,
        max: usize,
    ) -> impl DoubleEndedIterator<Item = Window<'a, I>> + 'a {
        let sequence = self.sequence;
        let available = sequence.len().saturating_sub(position);
        let upper = max.min(available);
        (min.max(1)..=upper).map(move |len| Window {
            position,
            items: &sequence[position..position + len],
        })
    }
}
