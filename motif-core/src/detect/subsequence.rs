//! Detectors where window and pattern differ in length.
//!
//! Both match by greedy leftmost subsequence alignment: walk the longer
//! side, consume an element of the shorter side whenever it matches, and
//! record what was skipped. Greedy alignment finds a subsequence embedding
//! whenever one exists, and its choice of skipped indices is deterministic.

use super::exact::exact_positions;
use super::record::{Extension, Fragmentation};
use super::{keys, Key};
use crate::config::VariationConfig;
use crate::error::Result;
use crate::extract::Extractor;
use crate::window::Scanner;
use tracing::{debug, trace};

/// Windows shorter than the pattern that equal it with some elements
/// deleted.
///
/// Window lengths run from `config.min_fragment_for(L)` up to `L - 1`, and
/// the longest fitting window wins at each position. Windows that sit inside
/// an exact repetition are not fragments, and a fragment overlapping an
/// earlier one is dropped.
pub fn fragmentation<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<Fragmentation>>
where
    E: Extractor<I>,
    E::Value: PartialEq,
    E::Aux: PartialEq,
{
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let scanner = Scanner::new(&pattern, &sequence)?;
    let len = pattern.len();
    let with_aux = config.require_same_aux;

    let min = config.min_fragment_for(len);
    if sequence.len() < len || min >= len {
        return Ok(Vec::new());
    }

    let exact_spans: Vec<(usize, usize)> = exact_positions(&pattern, &sequence, true)?
        .into_iter()
        .map(|start| (start, start + len))
        .collect();
    let inside_exact = |start: usize, end: usize| {
        exact_spans
            .iter()
            .any(|&(from, to)| from <= start && end <= to)
    };

    let mut found: Vec<Fragmentation> = Vec::new();
    let mut covered_until = 0;
    for position in 0..sequence.len() {
        if position < covered_until {
            continue;
        }
        let best = scanner
            .spans_at(position, min, len - 1)
            .rev()
            .filter(|window| !inside_exact(window.position, window.end()))
            .find_map(|window| {
                deleted_indices(&pattern, window.items, with_aux).map(|deleted| Fragmentation {
                    position,
                    window_length: window.len(),
                    deleted_indices: deleted,
                })
            });
        if let Some(fragment) = best {
            trace!(
                "fragmentation at {} (deleted {:?})",
                position,
                fragment.deleted_indices
            );
            covered_until = position + fragment.window_length;
            found.push(fragment);
        }
    }

    debug!(
        "fragmentation: pattern={} sequence={} matches={}",
        len,
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Windows longer than the pattern that contain all of it with extra items
/// interleaved.
///
/// Pattern elements are matched to the earliest window items that fit. The
/// window qualifies only when every leftover item lies strictly inside it,
/// so a repetition followed by a repeated item is not an extension. Window
/// lengths run from `L + 1` to `config.max_window_for(L)`, and the shortest
/// fitting window wins at each position. A one-element pattern has no
/// interior and never extends.
pub fn extension<I, E>(
    pattern: &[I],
    sequence: &[I],
    extractor: &E,
    config: &VariationConfig,
) -> Result<Vec<Extension>>
where
    E: Extractor<I>,
    E::Value: PartialEq,
    E::Aux: PartialEq,
{
    let pattern = keys(pattern, extractor);
    let sequence = keys(sequence, extractor);
    let scanner = Scanner::new(&pattern, &sequence)?;
    let len = pattern.len();
    let with_aux = config.require_same_aux;

    let max = config.max_window_for(len);
    if len < 2 || max <= len {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for position in 0..sequence.len() {
        let best = scanner.spans_at(position, len + 1, max).find_map(|window| {
            inserted_indices(&pattern, window.items, with_aux).map(|inserted| Extension {
                position,
                window_length: window.len(),
                inserted_indices: inserted,
            })
        });
        if let Some(extension) = best {
            trace!(
                "extension at {} (inserted {:?})",
                position,
                extension.inserted_indices
            );
            found.push(extension);
        }
    }

    debug!(
        "extension: pattern={} sequence={} matches={}",
        len,
        sequence.len(),
        found.len()
    );
    Ok(found)
}

/// Pattern indices to drop so that the rest equals `window`, or `None` when
/// the window is not a subsequence of the pattern.
fn deleted_indices<V, A>(
    pattern: &[Key<V, A>],
    window: &[Key<V, A>],
    with_aux: bool,
) -> Option<Vec<usize>>
where
    V: PartialEq,
    A: PartialEq,
{
    let mut deleted = Vec::with_capacity(pattern.len().saturating_sub(window.len()));
    let mut next = window.iter().peekable();
    for (index, expected) in pattern.iter().enumerate() {
        match next.peek() {
            Some(actual) if expected.matches(actual, with_aux) => {
                next.next();
            }
            _ => deleted.push(index),
        }
    }
    next.peek().is_none().then_some(deleted)
}

/// Window indices left over after matching the pattern leftmost-first, or
/// `None` unless every pattern element is matched and the leftovers sit
/// strictly inside the window.
fn inserted_indices<V, A>(
    pattern: &[Key<V, A>],
    window: &[Key<V, A>],
    with_aux: bool,
) -> Option<Vec<usize>>
where
    V: PartialEq,
    A: PartialEq,
{
    if window.len() <= pattern.len() {
        return None;
    }

    let mut wanted = pattern.iter().peekable();
    let mut inserted = Vec::with_capacity(window.len() - pattern.len());
    for (index, actual) in window.iter().enumerate() {
        match wanted.peek() {
            Some(expected) if expected.matches(actual, with_aux) => {
                wanted.next();
            }
            _ => inserted.push(index),
        }
    }

    let last = window.len() - 1;
    let interleaved = inserted.first() != Some(&0) && inserted.last() != Some(&last);
    (wanted.peek().is_none() && interleaved).then_some(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Aux;

    fn bare(values: &[i32]) -> Vec<Key<i32, ()>> {
        values
            .iter()
            .map(|&value| Key {
                value,
                aux: Aux::Absent,
            })
            .collect()
    }

    #[test]
    fn test_deleted_indices_greedy() {
        let pattern = bare(&[1, 2, 3, 4]);
        assert_eq!(
            deleted_indices(&pattern, &bare(&[1, 3, 4]), true),
            Some(vec![1])
        );
        assert_eq!(
            deleted_indices(&pattern, &bare(&[1, 2]), true),
            Some(vec![2, 3])
        );
        assert_eq!(deleted_indices(&pattern, &bare(&[3, 1]), true), None);
    }

    #[test]
    fn test_inserted_indices_needs_anchored_ends() {
        let pattern = bare(&[1, 2, 3]);
        assert_eq!(
            inserted_indices(&pattern, &bare(&[1, 9, 2, 3]), true),
            Some(vec![1])
        );
        assert_eq!(inserted_indices(&pattern, &bare(&[1, 2, 3, 9]), true), None);
        assert_eq!(inserted_indices(&pattern, &bare(&[9, 1, 2, 3]), true), None);
        assert_eq!(inserted_indices(&pattern, &bare(&[1, 2, 3]), true), None);
    }

    #[test]
    fn test_inserted_indices_match_leftmost() {
        let pattern = bare(&[1, 2, 3]);
        // The first 3 completes the pattern, so the repeated 3 trails it
        assert_eq!(inserted_indices(&pattern, &bare(&[1, 2, 3, 3]), true), None);
        assert_eq!(
            inserted_indices(&pattern, &bare(&[1, 2, 2, 3]), true),
            Some(vec![2])
        );
    }

    #[test]
    fn test_inserted_indices_two_element_pattern() {
        let pattern = bare(&[5, 7]);
        assert_eq!(
            inserted_indices(&pattern, &bare(&[5, 6, 6, 7]), true),
            Some(vec![1, 2])
        );
    }
}
