//! Combined results of every detector for one pattern and sequence.

use crate::arith::Arithmetic;
use crate::detect::{Extension, Fragmentation, Inversion, LocalChange, Transposition};
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// What [`Detector::analyze`](crate::Detector::analyze) found
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationReport<V, A> {
    pub pattern_len: usize,
    pub sequence_len: usize,
    pub repetitions: Vec<usize>,
    pub transpositions: Vec<Transposition<V>>,
    pub retrogrades: Vec<usize>,
    pub inversions: Vec<Inversion<V>>,
    pub aux_changes: Vec<LocalChange<A>>,
    pub value_changes: Vec<LocalChange<V>>,
    pub fragmentations: Vec<Fragmentation>,
    pub extensions: Vec<Extension>,
}

impl<V, A> VariationReport<V, A> {
    /// A report with no matches
    pub fn empty(pattern_len: usize, sequence_len: usize) -> Self {
        Self {
            pattern_len,
            sequence_len,
            repetitions: Vec::new(),
            transpositions: Vec::new(),
            retrogrades: Vec::new(),
            inversions: Vec::new(),
            aux_changes: Vec::new(),
            value_changes: Vec::new(),
            fragmentations: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Number of records across all detectors
    pub fn total(&self) -> usize {
        self.repetitions.len()
            + self.transpositions.len()
            + self.retrogrades.len()
            + self.inversions.len()
            + self.aux_changes.len()
            + self.value_changes.len()
            + self.fragmentations.len()
            + self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl<V, A> VariationReport<V, A>
where
    V: fmt::Display + Arithmetic,
    A: fmt::Display,
{
    /// Rendered records of one detector, by its name in [`DETECTORS`]
    ///
    /// [`DETECTORS`]: crate::detect::DETECTORS
    pub fn entries(&self, detector: &str) -> Option<Vec<String>> {
        self.sections()
            .into_iter()
            .find(|(name, _)| *name == detector)
            .map(|(_, entries)| entries)
    }

    /// One `(detector, entries)` pair per detector, in report order
    fn sections(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            (
                "repetition",
                self.repetitions.iter().map(|p| format!("@{}", p)).collect(),
            ),
            (
                "transposition",
                self.transpositions
                    .iter()
                    .map(|t| format!("@{} offset {}", t.position, t.offset))
                    .collect(),
            ),
            (
                "retrograde",
                self.retrogrades.iter().map(|p| format!("@{}", p)).collect(),
            ),
            (
                "inversion",
                self.inversions
                    .iter()
                    .map(|i| {
                        let axis = match i.axis.to_f64() {
                            Some(axis) => axis.to_string(),
                            None => format!("({})/2", i.axis.twice()),
                        };
                        format!("@{} axis {}", i.position, axis)
                    })
                    .collect(),
            ),
            (
                "local_aux_changes",
                self.aux_changes.iter().map(describe_change).collect(),
            ),
            (
                "local_value_changes",
                self.value_changes.iter().map(describe_change).collect(),
            ),
            (
                "fragmentation",
                self.fragmentations
                    .iter()
                    .map(|f| {
                        format!(
                            "@{} len {} deleted {:?}",
                            f.position, f.window_length, f.deleted_indices
                        )
                    })
                    .collect(),
            ),
            (
                "extension",
                self.extensions
                    .iter()
                    .map(|e| {
                        format!(
                            "@{} len {} inserted {:?}",
                            e.position, e.window_length, e.inserted_indices
                        )
                    })
                    .collect(),
            ),
        ]
    }
}

fn describe_change<T: fmt::Display>(change: &LocalChange<T>) -> String {
    let diffs: Vec<String> = change
        .diffs
        .iter()
        .map(|d| format!("{}: {} -> {}", d.index, d.expected, d.found))
        .collect();
    format!("@{} [{}]", change.position, diffs.join(", "))
}

#[cfg(feature = "colored")]
impl<V, A> fmt::Display for VariationReport<V, A>
where
    V: fmt::Display + Arithmetic,
    A: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} pattern {} items, sequence {} items, {} matches",
            "Variations:".bright_blue().bold(),
            self.pattern_len,
            self.sequence_len,
            self.total().to_string().bold()
        )?;
        for (name, entries) in self.sections() {
            if entries.is_empty() {
                writeln!(f, "  {:<20} {}", name.bright_black(), "-".bright_black())?;
            } else {
                let entries: Vec<String> =
                    entries.iter().map(|e| e.yellow().to_string()).collect();
                writeln!(f, "  {:<20} {}", name.cyan().bold(), entries.join("  "))?;
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "colored"))]
impl<V, A> fmt::Display for VariationReport<V, A>
where
    V: fmt::Display + Arithmetic,
    A: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Variations: pattern {} items, sequence {} items, {} matches",
            self.pattern_len,
            self.sequence_len,
            self.total()
        )?;
        for (name, entries) in self.sections() {
            let body = if entries.is_empty() {
                "-".to_string()
            } else {
                entries.join("  ")
            };
            writeln!(f, "  {:<20} {}", name, body)?;
        }
        Ok(())
    }
}
