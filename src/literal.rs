//! Item literals typed at the prompt.
//!
//! A list is whitespace- or comma-separated items; each item is `value` or
//! `value:aux`, where both sides are scalar literals (`60`, `1/2`, `0.25`,
//! `do`).

use anyhow::{bail, Result};
use motif_core::{Element, Scalar};

/// Parse one `value` or `value:aux` item
pub fn parse_item(input: &str) -> Result<Element> {
    let mut parts = input.split(':');
    let value = parts.next().unwrap_or_default().trim();
    let aux = parts.next().map(str::trim);
    if parts.next().is_some() {
        bail!("'{}' has more than one ':'", input);
    }
    if value.is_empty() {
        bail!("'{}' is missing a value", input);
    }

    let value = scalar(value);
    match aux {
        None => Ok(Element::Bare(value)),
        Some("") => bail!("'{}' is missing an aux value after ':'", input),
        Some(aux) => Ok(Element::Pair(value, scalar(aux))),
    }
}

/// Parse a list of items; an empty input is an empty list
pub fn parse_items(input: &str) -> Result<Vec<Element>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
        .map(parse_item)
        .collect()
}

/// Render items back in the form [`parse_items`] accepts
pub fn format_items(items: &[Element]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn scalar(literal: &str) -> Scalar {
    match literal.parse() {
        Ok(scalar) => scalar,
        Err(never) => match never {},
    }
}
