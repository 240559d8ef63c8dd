//! WASM bindings for motif-core
//!
//! Patterns and sequences arrive as arrays of [`Element`]s: a number, a
//! ratio string such as `"1/2"`, a label, or a `[value, aux]` pair.

use crate::config::VariationConfig;
use crate::detect::{Detector, DETECTORS};
use crate::extract::Defaults;
use crate::report::VariationReport;
use crate::value::{Element, Scalar};
use wasm_bindgen::prelude::*;

/// Result envelope handed back to JavaScript
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisJS {
    pub success: bool,
    pub report: Option<VariationReport<Scalar, Scalar>>,
    /// Human-readable rendering of the report
    pub summary: Option<String>,
    pub error: Option<String>,
}

impl AnalysisJS {
    fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            report: None,
            summary: None,
            error: Some(error.to_string()),
        }
    }
}

fn analyze_elements(
    pattern: &[Element],
    sequence: &[Element],
    config: VariationConfig,
) -> AnalysisJS {
    let detector = Detector::new(Defaults).with_config(config);
    match detector.analyze(pattern, sequence) {
        Ok(report) => AnalysisJS {
            success: true,
            summary: Some(report.to_string()),
            report: Some(report),
            error: None,
        },
        Err(e) => AnalysisJS::failed(e),
    }
}

/// Run every detector. `config` may be `undefined` for the defaults.
#[wasm_bindgen]
pub fn detect_variations(pattern: JsValue, sequence: JsValue, config: JsValue) -> JsValue {
    let result = (|| {
        let pattern: Vec<Element> = serde_wasm_bindgen::from_value(pattern)
            .map_err(|e| format!("Invalid pattern: {}", e))?;
        let sequence: Vec<Element> = serde_wasm_bindgen::from_value(sequence)
            .map_err(|e| format!("Invalid sequence: {}", e))?;
        let config = if config.is_undefined() || config.is_null() {
            VariationConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| format!("Invalid config: {}", e))?
        };
        Ok::<_, String>(analyze_elements(&pattern, &sequence, config))
    })();

    let analysis = result.unwrap_or_else(AnalysisJS::failed);
    serde_wasm_bindgen::to_value(&analysis).unwrap_or(JsValue::NULL)
}

/// Same as [`detect_variations`] with default settings, JSON in and out
#[wasm_bindgen]
pub fn detect_variations_json(pattern: &str, sequence: &str) -> String {
    let parsed = serde_json::from_str::<Vec<Element>>(pattern)
        .map_err(|e| format!("Invalid pattern: {}", e))
        .and_then(|pattern| {
            serde_json::from_str::<Vec<Element>>(sequence)
                .map(|sequence| (pattern, sequence))
                .map_err(|e| format!("Invalid sequence: {}", e))
        });

    let analysis = match parsed {
        Ok((pattern, sequence)) => {
            analyze_elements(&pattern, &sequence, VariationConfig::default())
        }
        Err(e) => AnalysisJS::failed(e),
    };
    serde_json::to_string(&analysis).unwrap_or_else(|e| {
        serde_json::json!({ "success": false, "error": e.to_string() }).to_string()
    })
}

/// Names accepted by the REPL's `detect` command, in report order
#[wasm_bindgen]
pub fn detector_names() -> js_sys::Array {
    DETECTORS.iter().map(|name| JsValue::from_str(name)).collect()
}
