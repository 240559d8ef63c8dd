use super::record::{Diff, LocalChange};
use super::{keys, Key};
use crate::arith::Arithmetic;
use crate::config::VariationConfig;
use crate::error::Result;
use crate::extract::{Aux, Extractor};
use crate::tolerance::{Change, Tolerance};
use crate::window::Scanner;
use tracing::{debug, trace};

/// Windows with the pattern's values but a few changed aux attributes.
///
/// Aux values are classified with the configured tolerance; an attribute
/// present on only one side, or a change beyond `max_delta`, rejects the
/// window. Between 1 and `max_changes` changed indices are required.
pub fn local_aux_changes<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<LocalChange<E::Aux>>>
where
    E: Extractor<I>,
    E::Value: PartialEq,
    E::Aux: PartialEq + Arithmetic + Clone,
{
    config.validate()?;
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let tolerance = config.tolerance();

    let found = scan(&pattern, &sequence, config, |expected, actual| {
        if expected.value != actual.value {
            return Ok(Verdict::Reject);
        }
        aux_verdict(&tolerance, &expected.aux, &actual.aux)
    })?;

    debug!(
        "local_aux_changes: pattern={} sequence={} matches={}",
        pattern.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Windows with the pattern's aux but a few changed primary values.
///
/// Aux must be equal at every index when `config.require_same_aux` is set.
/// Values are classified like aux in [`local_aux_changes`].
pub fn local_value_changes<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<LocalChange<E::Value>>>
where
    E: Extractor<I>,
    E::Value: PartialEq + Arithmetic + Clone,
    E::Aux: PartialEq,
{
    config.validate()?;
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let tolerance = config.tolerance();

    let found = scan(&pattern, &sequence, config, |expected, actual| {
        if config.require_same_aux && expected.aux != actual.aux {
            return Ok(Verdict::Reject);
        }
        Ok(match tolerance.classify(&expected.value, &actual.value)? {
            Change::Same => Verdict::Keep,
            Change::Changed => Verdict::Diff(expected.value.clone(), actual.value.clone()),
            Change::Mismatch => Verdict::Reject,
        })
    })?;

    debug!(
        "local_value_changes: pattern={} sequence={} matches={}",
        pattern.len(),
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Outcome for one index of a window
enum Verdict<T> {
    Keep,
    Diff(T, T),
    Reject,
}

fn aux_verdict<A>(tolerance: &Tolerance, expected: &Aux<A>, actual: &Aux<A>) -> Result<Verdict<A>>
where
    A: PartialEq + Arithmetic + Clone,
{
    Ok(match tolerance.classify_aux(expected, actual)? {
        Change::Same => Verdict::Keep,
        Change::Mismatch => Verdict::Reject,
        Change::Changed => match (expected, actual) {
            (Aux::Present(e), Aux::Present(a)) => Verdict::Diff(e.clone(), a.clone()),
            _ => Verdict::Reject,
        },
    })
}

fn scan<V, A, T, F>(
    pattern: &[Key<V, A>],
    sequence: &[Key<V, A>],
    config: &VariationConfig,
    judge: F,
) -> Result<Vec<LocalChange<T>>>
where
    F: Fn(&Key<V, A>, &Key<V, A>) -> Result<Verdict<T>>,
{
    let scanner = Scanner::new(pattern, sequence)?;
    let limit = config.max_changes_for(pattern.len());

    let mut found = Vec::new();
    'windows: for window in scanner.windows() {
        let mut diffs = Vec::new();
        for (index, (expected, actual)) in pattern.iter().zip(window.items).enumerate() {
            match judge(expected, actual)? {
                Verdict::Keep => {}
                Verdict::Reject => continue 'windows,
                Verdict::Diff(was, now) => {
                    if diffs.len() == limit {
                        continue 'windows;
                    }
                    diffs.push(Diff {
                        index,
                        expected: was,
                        found: now,
                    });
                }
            }
        }
        if !diffs.is_empty() {
            trace!("local change at {} ({} diffs)", window.position, diffs.len());
            found.push(LocalChange {
                position: window.position,
                diffs,
            });
        }
    }
    Ok(found)
}
