//! The eight variation detectors.
//!
//! Each detector is a pure function of a pattern, a sequence, an extractor
//! and (for those with options) a [`VariationConfig`]. Results come back in
//! ascending `position` with at most one record per position. An empty
//! pattern is an error; a sequence shorter than the pattern simply yields no
//! matches.
//!
//! | detector | record |
//! |----------|--------|
//! | [`repetition`] | position |
//! | [`transposition`] | [`Transposition`] |
//! | [`retrograde`] | position |
//! | [`inversion`] | [`Inversion`] |
//! | [`local_aux_changes`] | [`LocalChange`] of aux values |
//! | [`local_value_changes`] | [`LocalChange`] of primary values |
//! | [`fragmentation`] | [`Fragmentation`] |
//! | [`extension`] | [`Extension`] |
//!
//! [`VariationConfig`]: crate::config::VariationConfig

mod detector;
mod exact;
mod local;
mod offset;
mod record;
mod subsequence;

#[cfg(test)]
mod tests;

pub use detector::Detector;
pub use exact::{repetition, retrograde};
pub use local::{local_aux_changes, local_value_changes};
pub use offset::{inversion, transposition};
pub use record::{Axis, Diff, Extension, Fragmentation, Inversion, LocalChange, Transposition};
pub use subsequence::{extension, fragmentation};

use crate::extract::{Aux, Extractor};

/// Detector names, in the order a report lists them
pub const DETECTORS: [&str; 8] = [
    "repetition",
    "transposition",
    "retrograde",
    "inversion",
    "local_aux_changes",
    "local_value_changes",
    "fragmentation",
    "extension",
];

/// An item reduced to what the detectors compare
#[derive(Debug, Clone)]
pub(crate) struct Key<V, A> {
    pub value: V,
    pub aux: Aux<A>,
}

impl<V: PartialEq, A: PartialEq> Key<V, A> {
    /// Same primary value, and same aux when `with_aux` is set
    pub fn matches(&self, other: &Self, with_aux: bool) -> bool {
        self.value == other.value && (!with_aux || self.aux == other.aux)
    }
}

/// Run the extractor once per item
pub(crate) fn keys<I, E>(items: &[I], extractor: &E) -> Vec<Key<E::Value, E::Aux>>
where
    E: Extractor<I>,
{
    items
        .iter()
        .map(|item| Key {
            value: extractor.value_of(item),
            aux: extractor.aux_of(item),
        })
        .collect()
}
