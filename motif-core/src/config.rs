//! Detector configuration.
//!
//! Every knob has a default tied to the pattern length, so a default
//! [`VariationConfig`] works for patterns of any size. Unset limits are
//! resolved per call through the `*_for` helpers.

use crate::error::{Result, VariationError};
use crate::tolerance::Tolerance;
use std::fmt;

/// Settings shared by the detectors that take options.
///
/// - `epsilon`: differences within this are not changes (local-change detectors)
/// - `max_delta`: differences above this are mismatches (local-change detectors)
/// - `max_changes`: most differing indices per window, default `max(1, L/4)`
/// - `require_same_aux`: compare aux in transposition, retrograde, inversion,
///   local value changes, fragmentation and extension
/// - `max_window`: longest extension window, default `2 * L`
/// - `min_fragment`: shortest fragment window, default `L - L/4`
///
/// `epsilon` is a noise floor, not a ceiling: `|a - b| <= epsilon` is
/// treated as equal. To cap how large a difference may still count as a
/// local change, set `max_delta`. With both left at their defaults every
/// unequal value is a change and no arithmetic runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VariationConfig {
    pub epsilon: f64,
    pub max_delta: Option<f64>,
    pub max_changes: Option<usize>,
    pub require_same_aux: bool,
    pub max_window: Option<usize>,
    pub min_fragment: Option<usize>,
}

impl VariationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact comparisons, at most one local change per window
    pub fn strict() -> Self {
        Self {
            max_changes: Some(1),
            ..Self::default()
        }
    }

    /// Any number of local changes, aux ignored where it is optional
    pub fn lenient() -> Self {
        Self {
            max_changes: Some(usize::MAX),
            require_same_aux: false,
            ..Self::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_delta(mut self, max_delta: f64) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    pub fn with_max_changes(mut self, max_changes: usize) -> Self {
        self.max_changes = Some(max_changes);
        self
    }

    pub fn with_same_aux(mut self, require_same_aux: bool) -> Self {
        self.require_same_aux = require_same_aux;
        self
    }

    pub fn with_max_window(mut self, max_window: usize) -> Self {
        self.max_window = Some(max_window);
        self
    }

    pub fn with_min_fragment(mut self, min_fragment: usize) -> Self {
        self.min_fragment = Some(min_fragment);
        self
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            epsilon: self.epsilon,
            max_delta: self.max_delta,
        }
    }

    /// Most differing indices a local change may have
    pub fn max_changes_for(&self, pattern_len: usize) -> usize {
        self.max_changes.unwrap_or_else(|| (pattern_len / 4).max(1))
    }

    /// Longest window an extension may span
    pub fn max_window_for(&self, pattern_len: usize) -> usize {
        self.max_window
            .unwrap_or_else(|| pattern_len.saturating_mul(2))
    }

    /// Shortest window a fragment may span (never below 1)
    pub fn min_fragment_for(&self, pattern_len: usize) -> usize {
        self.min_fragment
            .unwrap_or(pattern_len - pattern_len / 4)
            .max(1)
    }

    /// Reject thresholds that make classification meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(VariationError::InvalidInput(format!(
                "epsilon must be a finite, non-negative number (got {})",
                self.epsilon
            )));
        }
        if let Some(ceiling) = self.max_delta {
            if ceiling.is_nan() || ceiling < self.epsilon {
                return Err(VariationError::InvalidInput(format!(
                    "max_delta must be at least epsilon {} (got {})",
                    self.epsilon, ceiling
                )));
            }
        }
        Ok(())
    }
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            max_delta: None,
            max_changes: None,
            require_same_aux: true,
            max_window: None,
            min_fragment: None,
        }
    }
}

impl fmt::Display for VariationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_auto<T: fmt::Display>(value: Option<T>, auto: &str) -> String {
            value.map_or_else(|| auto.to_string(), |v| v.to_string())
        }

        writeln!(f, "epsilon       {}", self.epsilon)?;
        writeln!(f, "max_delta     {}", or_auto(self.max_delta, "none"))?;
        writeln!(f, "max_changes   {}", or_auto(self.max_changes, "auto (L/4, at least 1)"))?;
        writeln!(f, "same_aux      {}", self.require_same_aux)?;
        writeln!(f, "max_window    {}", or_auto(self.max_window, "auto (2L)"))?;
        write!(f, "min_fragment  {}", or_auto(self.min_fragment, "auto (L - L/4)"))
    }
}
