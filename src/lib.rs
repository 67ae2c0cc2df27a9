//! Finger Count Web - hand skeleton overlay with smoothed finger counting
//!
//! Landmark detection runs in JavaScript. Each video frame's result is
//! passed in through the `bridge` entry points, classified per finger,
//! smoothed over recent frames, and read back as display state plus
//! overlay geometry.
//!
//! The logic modules are public so the pipeline can also be driven
//! natively through `FrameProcessor`, one instance per camera stream.

pub mod config;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod classifier;
pub mod smoothing;
pub mod frame;
pub mod renderer;
mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_detection_json,
    apply_hand_landmarks,
    report_detector_failure,
    set_show_skeleton,
    set_multi_hand,
    set_mirror,
    configure,
    get_config_json,
    reset_smoothing,
    get_finger_count,
    get_hand_label,
    get_status_message,
    get_display_state_json,
    get_render_json,
    get_overlay_vertices,
};

pub use config::{CoordinateSpace, OverlayConfig};
pub use error::OverlayError;
pub use frame::{DetectionResult, DisplayState, FrameOutput, FrameProcessor, RenderInstructions};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route log output to the browser console
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    bridge::install_console_logger(level);
    log::info!("✅ Finger counter ready");
}
