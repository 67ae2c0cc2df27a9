//! Overlay session and JS bridge
//!
//! Holds the frame processor for the page's single camera stream and
//! exposes it to JavaScript. Called once per video frame.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::frame::{DetectionResult, FrameOutput, FrameProcessor};
use crate::renderer::{build_overlay_vertices, flatten};

/// Processor plus the output of the last frame, read back by the UI
#[derive(Default)]
struct Session {
    processor: FrameProcessor,
    last_output: FrameOutput,
}

impl Session {
    fn apply(&mut self, parsed: Result<DetectionResult, OverlayError>) -> Result<(), JsValue> {
        match parsed {
            Ok(result) => {
                self.last_output = self.processor.process_frame(&result);
                Ok(())
            }
            Err(err) => {
                // Unreadable frame: same as a detector failure, loop keeps going
                self.last_output = self.processor.report_detector_failure(&err.to_string());
                Err(err.into())
            }
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS - FRAME INPUT
// ============================================================================

/// Process a hand landmarker result passed as `JSON.stringify(result)`
#[wasm_bindgen]
pub fn process_detection_json(json: &str, frame_width: f32, frame_height: f32) -> Result<(), JsValue> {
    let parsed = DetectionResult::from_json(json, frame_width, frame_height);
    SESSION.with(|cell| cell.borrow_mut().apply(parsed))
}

/// Process a frame from a flat Float32Array
///
/// - `flat_data`: `dims` floats per landmark, hands back to back
/// - `counts`: landmarks per hand
/// - `labels`: handedness category name per hand
#[wasm_bindgen]
pub fn apply_hand_landmarks(
    flat_data: &[f32],
    dims: usize,
    counts: &[u32],
    labels: js_sys::Array,
    frame_width: f32,
    frame_height: f32,
) -> Result<(), JsValue> {
    let labels: Vec<String> = labels
        .iter()
        .map(|v| v.as_string().unwrap_or_default())
        .collect();
    let parsed = DetectionResult::from_flat(flat_data, dims, counts, &labels, frame_width, frame_height);
    SESSION.with(|cell| cell.borrow_mut().apply(parsed))
}

/// Called when `detectForVideo` throws; the frame counts as empty
#[wasm_bindgen]
pub fn report_detector_failure(error: JsValue) {
    let reason = error.as_string().unwrap_or_else(|| format!("{:?}", error));
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        let output = session.processor.report_detector_failure(&reason);
        session.last_output = output;
    });
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS - CONFIGURATION
// ============================================================================

#[wasm_bindgen]
pub fn set_show_skeleton(enabled: bool) {
    update_config(|c| c.show_skeleton = enabled);
}

#[wasm_bindgen]
pub fn set_multi_hand(enabled: bool) {
    update_config(|c| c.multi_hand = enabled);
}

#[wasm_bindgen]
pub fn set_mirror(enabled: bool) {
    update_config(|c| c.mirror = enabled);
}

/// Replace the whole configuration from JSON; omitted fields take defaults
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config: OverlayConfig = serde_json::from_str(json).map_err(OverlayError::from)?;
    log::info!("Overlay configured: {:?}", config);
    SESSION.with(|cell| cell.borrow_mut().processor.set_config(config));
    Ok(())
}

#[wasm_bindgen]
pub fn get_config_json() -> String {
    SESSION.with(|cell| to_json(cell.borrow().processor.config()))
}

/// Drop smoothing history, e.g. when the camera is switched
#[wasm_bindgen]
pub fn reset_smoothing() {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        session.processor.reset();
        session.last_output = FrameOutput::default();
    });
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS - OUTPUT
// ============================================================================

#[wasm_bindgen]
pub fn get_finger_count() -> u8 {
    SESSION.with(|cell| cell.borrow().last_output.display.finger_count)
}

#[wasm_bindgen]
pub fn get_hand_label() -> String {
    SESSION.with(|cell| cell.borrow().last_output.display.hand_label.as_str().to_string())
}

#[wasm_bindgen]
pub fn get_status_message() -> String {
    SESSION.with(|cell| cell.borrow().last_output.display.status_message.clone())
}

/// `{fingerCount, handLabel, statusMessage}`
#[wasm_bindgen]
pub fn get_display_state_json() -> String {
    SESSION.with(|cell| to_json(&cell.borrow().last_output.display))
}

/// Segments and markers for the last frame, for canvas-2D drawing
#[wasm_bindgen]
pub fn get_render_json() -> String {
    SESSION.with(|cell| to_json(&cell.borrow().last_output.render))
}

/// Triangle list for the last frame, 6 floats per vertex (x, y, r, g, b, a)
#[wasm_bindgen]
pub fn get_overlay_vertices() -> Vec<f32> {
    SESSION.with(|cell| flatten(&build_overlay_vertices(&cell.borrow().last_output.render)))
}

// ============================================================================
// INTERNAL
// ============================================================================

fn update_config(update: impl FnOnce(&mut OverlayConfig)) {
    SESSION.with(|cell| cell.borrow_mut().processor.update_config(update));
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("Failed to serialize overlay output: {}", err);
        String::from("null")
    })
}
