//! # Motif
//!
//! Interactive front end for [`motif_core`]: enter a pattern and a sequence
//! as item literals, then ask which structured variations of the pattern
//! occur in the sequence.
//!
//! ## Modules
//!
//! - `literal`: Parses items such as `60`, `62:1/2` or `do:q` into [`Element`]s.
//! - `session`: The pattern, sequence and settings the REPL works on.
//! - `commands`: Command registry and handlers for the REPL.
//! - `repl`: The Read-Eval-Print Loop, including script watching.

pub mod commands;
pub mod literal;
pub mod repl;
pub mod session;

pub use crate::literal::{format_items, parse_item, parse_items};
pub use crate::session::Session;
pub use motif_core::{Detector, Element, Scalar, VariationConfig, VariationReport};
