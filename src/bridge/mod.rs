//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod logger;
mod session;

pub use logger::install as install_console_logger;

pub use session::{
    // Frame input
    process_detection_json,
    apply_hand_landmarks,
    report_detector_failure,
    // Configuration
    set_show_skeleton,
    set_multi_hand,
    set_mirror,
    configure,
    get_config_json,
    reset_smoothing,
    // Output
    get_finger_count,
    get_hand_label,
    get_status_message,
    get_display_state_json,
    get_render_json,
    get_overlay_vertices,
};
