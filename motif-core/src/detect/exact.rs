use super::{keys, Key};
use crate::config::VariationConfig;
use crate::error::Result;
use crate::extract::Extractor;
use crate::window::Scanner;
use tracing::{debug, trace};

/// Positions where the window equals the pattern, values and aux alike.
///
/// ```
/// use motif_core::{repetition, Defaults};
///
/// let found = repetition(&[1i32, 2, 3], &[0, 1, 2, 3, 4, 2, 3, 4], &Defaults).unwrap();
/// assert_eq!(found, vec![1]);
/// ```
pub fn repetition<I, E>(pattern: &[I], sequence: &[I], extractor: &E) -> Result<Vec<usize>>
where
    E: Extractor<I>,
    E::Value: PartialEq,
    E::Aux: PartialEq,
{
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let found = exact_positions(&pattern, &sequence, true)?;
    debug!(
        "repetition: pattern={} sequence={} matches={}",
        pattern.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Positions where the window equals the pattern read backwards.
///
/// Aux is compared when `config.require_same_aux` is set. A palindromic
/// pattern is found by both this and [`repetition`].
pub fn retrograde<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<usize>>
where
    E: Extractor<I>,
    E::Value: PartialEq,
    E::Aux: PartialEq,
{
    let mut reversed = keys(pattern, extractor);
    reversed.reverse();
    let sequence = keys(sequence, extractor);
    let found = exact_positions(&reversed, &sequence, config.require_same_aux)?;
    debug!(
        "retrograde: pattern={} sequence={} matches={}",
        reversed.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Shared by repetition, retrograde and the fragmentation exclusion
pub(super) fn exact_positions<V, A>(
    pattern: &[Key<V, A>],
    sequence: &[Key<V, A>],
    with_aux: bool,
) -> Result<Vec<usize>>
where
    V: PartialEq,
    A: PartialEq,
{
    let scanner = Scanner::new(pattern, sequence)?;
    let found = scanner
        .windows()
        .filter(|window| {
            window
                .items
                .iter()
                .zip(pattern)
                .all(|(found, expected)| expected.matches(found, with_aux))
        })
        .map(|window| {
            trace!("exact match at {}", window.position);
            window.position
        })
        .collect();
    Ok(found)
}
