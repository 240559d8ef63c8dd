//! State the REPL commands act on: the current pattern, sequence and
//! detector settings.

use crate::literal::{format_items, parse_items};
use anyhow::{anyhow, bail, Context, Result};
use motif_core::{Defaults, Detector, Element, Scalar, VariationConfig, VariationReport, DETECTORS};

/// Pattern, sequence and configuration of one REPL session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pattern: Vec<Element>,
    sequence: Vec<Element>,
    config: VariationConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &[Element] {
        &self.pattern
    }

    pub fn sequence(&self) -> &[Element] {
        &self.sequence
    }

    pub fn config(&self) -> &VariationConfig {
        &self.config
    }

    /// Replace the pattern, returning how many items it has
    pub fn set_pattern(&mut self, input: &str) -> Result<usize> {
        let items = parse_items(input)?;
        if items.is_empty() {
            bail!("pattern needs at least one item");
        }
        self.pattern = items;
        Ok(self.pattern.len())
    }

    /// Replace the sequence, returning how many items it has
    pub fn set_sequence(&mut self, input: &str) -> Result<usize> {
        self.sequence = parse_items(input)?;
        Ok(self.sequence.len())
    }

    /// Both lists in literal form
    pub fn show(&self) -> String {
        format!(
            "pattern:  {}\nsequence: {}",
            or_none(&self.pattern),
            or_none(&self.sequence)
        )
    }

    /// Update one setting. `auto` clears an optional limit.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.config.clone();
        match key {
            "epsilon" => config.epsilon = number(key, value)?,
            "max_delta" => config.max_delta = optional(value, |v| number(key, v))?,
            "max_changes" => config.max_changes = optional(value, |v| count(key, v))?,
            "max_window" => config.max_window = optional(value, |v| count(key, v))?,
            "min_fragment" => config.min_fragment = optional(value, |v| count(key, v))?,
            "same_aux" => config.require_same_aux = flag(key, value)?,
            _ => bail!(
                "unknown setting '{}' ({})",
                key,
                "epsilon, max_delta, max_changes, max_window, min_fragment, same_aux"
            ),
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Restore default settings, keeping pattern and sequence
    pub fn reset(&mut self) {
        self.config = VariationConfig::default();
    }

    /// Run one detector by name, or all of them for `all`
    pub fn detect(&self, which: &str) -> Result<VariationReport<Scalar, Scalar>> {
        if self.pattern.is_empty() {
            bail!("no pattern set (use: pattern <items>)");
        }
        let detectors: Vec<&str> = if which == "all" {
            DETECTORS.to_vec()
        } else {
            let name = DETECTORS
                .iter()
                .find(|name| **name == which || name.starts_with(which))
                .ok_or_else(|| anyhow!("unknown detector '{}'", which))?;
            vec![*name]
        };

        let detector = Detector::new(Defaults).with_config(self.config.clone());
        let report = detector.analyze_only(&detectors, &self.pattern, &self.sequence)?;
        tracing::debug!("detect {}: {} matches", which, report.total());
        Ok(report)
    }

    /// Command lines of a script: blank lines and `#` comments dropped
    pub fn script_lines(contents: &str) -> impl Iterator<Item = &str> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
    }
}

fn or_none(items: &[Element]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        format_items(items)
    }
}

fn number(key: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("{} expects a number, got '{}'", key, value))
}

fn count(key: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("{} expects a whole number, got '{}'", key, value))
}

fn flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => bail!("{} expects on/off, got '{}'", key, value),
    }
}

fn optional<T>(value: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
    if value == "auto" || value == "none" {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}
