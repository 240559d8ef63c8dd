//! Detectors relating a window to the pattern through one arithmetic
//! constant: a shift (transposition) or a mirror axis (inversion).
//!
//! Arithmetic runs only on windows whose aux already agrees, so an error
//! from a value type without arithmetic surfaces at the first window that
//! actually needs it.

use super::record::{Axis, Inversion, Transposition};
use super::{keys, Key};
use crate::arith::Arithmetic;
use crate::config::VariationConfig;
use crate::error::{Result, VariationError};
use crate::extract::Extractor;
use crate::window::Scanner;
use tracing::{debug, trace};

/// Windows whose values all differ from the pattern's by the same offset.
///
/// An offset of zero is reported too, so a plain repetition also shows up
/// here. Differences are compared exactly; `epsilon` does not apply. A
/// window whose offset overflows the value type does not match.
pub fn transposition<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<Transposition<E::Value>>>
where
    E: Extractor<I>,
    E::Value: PartialEq + Arithmetic,
    E::Aux: PartialEq,
{
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let scanner = Scanner::new(&pattern, &sequence)?;

    let mut found = Vec::new();
    for window in scanner.windows() {
        if config.require_same_aux && !same_aux(&pattern, window.items) {
            continue;
        }
        let Some(offset) = representable(window.items[0].value.try_sub(&pattern[0].value))? else {
            continue;
        };
        if holds_for_all(&pattern, window.items, |expected, actual| {
            Ok(representable(actual.try_sub(expected))?.is_some_and(|delta| delta == offset))
        })? {
            trace!("transposition at {}", window.position);
            found.push(Transposition {
                position: window.position,
                offset,
            });
        }
    }

    debug!(
        "transposition: pattern={} sequence={} matches={}",
        pattern.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Windows that mirror the pattern about an axis.
///
/// The axis is halfway between the first pattern value and the first window
/// value. A window matches when `window[i] + pattern[i]` is the same sum for
/// every index, which keeps half-step axes exact for integers. Aux must be
/// unchanged when `config.require_same_aux` is set. Sums that overflow the
/// value type never match.
pub fn inversion<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<Inversion<E::Value>>>
where
    E: Extractor<I>,
    E::Value: PartialEq + Arithmetic,
    E::Aux: PartialEq,
{
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let scanner = Scanner::new(&pattern, &sequence)?;

    let mut found = Vec::new();
    for window in scanner.windows() {
        if config.require_same_aux && !same_aux(&pattern, window.items) {
            continue;
        }
        let Some(twice) = representable(window.items[0].value.try_add(&pattern[0].value))? else {
            continue;
        };
        if holds_for_all(&pattern, window.items, |expected, actual| {
            Ok(representable(actual.try_add(expected))?.is_some_and(|sum| sum == twice))
        })? {
            trace!("inversion at {}", window.position);
            found.push(Inversion {
                position: window.position,
                axis: Axis::from_twice(twice),
            });
        }
    }

    debug!(
        "inversion: pattern={} sequence={} matches={}",
        pattern.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Overflow means the result is not representable, so nothing can equal it
fn representable<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(VariationError::Overflow { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

fn same_aux<V, A: PartialEq>(pattern: &[Key<V, A>], window: &[Key<V, A>]) -> bool {
    pattern.iter().zip(window).all(|(p, w)| p.aux == w.aux)
}

/// Index 0 holds by construction, so checking starts at 1
fn holds_for_all<V, A, F>(pattern: &[Key<V, A>], window: &[Key<V, A>], check: F) -> Result<bool>
where
    F: Fn(&V, &V) -> Result<bool>,
{
    for (expected, actual) in pattern.iter().zip(window).skip(1) {
        if !check(&expected.value, &actual.value)? {
            return Ok(false);
        }
    }
    Ok(true)
}
