//! Errors raised at the JS boundary
//!
//! Only input that cannot be read at all becomes an error. Malformed hands
//! and degenerate geometry are absorbed inside the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("landmark data length {actual} does not match expected {expected}")]
    FlatDataLength { expected: usize, actual: usize },

    #[error("unsupported landmark dimensions: {0} (expected 2 or 3)")]
    UnsupportedDimensions(usize),

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, OverlayError>;

impl From<OverlayError> for wasm_bindgen::JsValue {
    fn from(err: OverlayError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
