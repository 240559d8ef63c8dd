//! Equality and tolerance rules for the local-change detectors.

use crate::arith::{distance, Arithmetic};
use crate::error::Result;
use crate::extract::Aux;

/// How a sequence value relates to the pattern value at the same index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Equal, or within epsilon
    Same,
    /// Different enough to count as a local change
    Changed,
    /// Too different to be a local change; the window does not match
    Mismatch,
}

/// Thresholds for classifying a difference.
///
/// - `epsilon`: differences `|a - b| <= epsilon` count as equal
/// - `max_delta`: differences above this ceiling are mismatches, not changes
///
/// With the defaults (`epsilon == 0`, no ceiling) values are compared with
/// `==` only and no arithmetic is attempted, so labels and other
/// non-numeric values classify fine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance {
    pub epsilon: f64,
    pub max_delta: Option<f64>,
}

impl Tolerance {
    /// Plain equality: any observable difference is a change
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_delta: None,
        }
    }

    pub fn with_max_delta(mut self, max_delta: f64) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// True when classification never needs arithmetic
    pub fn is_exact(&self) -> bool {
        self.epsilon == 0.0 && self.max_delta.is_none()
    }

    /// Symmetric tolerance check `|a - b| <= epsilon`
    pub fn within<T: PartialEq + Arithmetic>(&self, a: &T, b: &T) -> Result<bool> {
        if a == b {
            return Ok(true);
        }
        if self.epsilon == 0.0 {
            return Ok(false);
        }
        Ok(distance(a, b)? <= self.epsilon)
    }

    pub fn classify<T: PartialEq + Arithmetic>(&self, expected: &T, found: &T) -> Result<Change> {
        if expected == found {
            return Ok(Change::Same);
        }
        if self.is_exact() {
            return Ok(Change::Changed);
        }

        let delta = distance(expected, found)?;
        if delta <= self.epsilon {
            Ok(Change::Same)
        } else if self.max_delta.is_some_and(|ceiling| delta > ceiling) {
            Ok(Change::Mismatch)
        } else {
            Ok(Change::Changed)
        }
    }

    /// Like [`classify`](Self::classify); an attribute present on one side
    /// only is a mismatch.
    pub fn classify_aux<A: PartialEq + Arithmetic>(
        &self,
        expected: &Aux<A>,
        found: &Aux<A>,
    ) -> Result<Change> {
        match (expected, found) {
            (Aux::Absent, Aux::Absent) => Ok(Change::Same),
            (Aux::Present(e), Aux::Present(f)) => self.classify(e, f),
            _ => Ok(Change::Mismatch),
        }
    }
}
