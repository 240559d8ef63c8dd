//! # Motif Core
//!
//! Detects structured variations of a short pattern inside a longer item
//! sequence: repetitions, transpositions, retrogrades, inversions, local
//! changes of values or attributes, fragmentations and extensions.
//!
//! Items are opaque. Detectors read them only through an [`Extractor`],
//! which yields a primary value and an optional auxiliary attribute per
//! item. [`Defaults`] covers plain values, `(value, aux)` pairs and the
//! dynamic [`Element`].
//!
//! ## Features
//!
//! - **serde**: Serialize records, reports and configuration
//! - **wasm**: WASM bindings via wasm-bindgen
//! - **colored**: Colored report rendering (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use motif_core::{transposition, Defaults, VariationConfig};
//!
//! let pattern = [(60i32, "q"), (62, "e"), (64, "e")];
//! let sequence = [(62, "q"), (64, "e"), (66, "e")];
//! let found = transposition(&pattern, &sequence, &Defaults, &VariationConfig::default()).unwrap();
//! assert_eq!(found[0].offset, 2);
//! ```

pub mod arith;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod report;
pub mod tolerance;
pub mod value;
pub mod window;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use arith::Arithmetic;
pub use config::VariationConfig;
pub use detect::{
    extension, fragmentation, inversion, local_aux_changes, local_value_changes, repetition,
    retrograde, transposition, Axis, Detector, Diff, Extension, Fragmentation, Inversion,
    LocalChange, Transposition, DETECTORS,
};
pub use error::{Result, VariationError};
pub use extract::{Aux, Defaults, Extractor, FnExtractor};
pub use report::VariationReport;
pub use tolerance::{Change, Tolerance};
pub use value::{Element, Exact, Scalar};
