//! Frame module - per-frame orchestration from detector output to overlay
//!
//! Re-exports only. All logic in submodules.

mod detection;
mod normalize;
mod overlay;
mod display;
mod processor;

pub use detection::{DetectionResult, DetectedHand};
pub use normalize::{is_pixel_space, normalize_pose, PIXEL_SPACE_THRESHOLD};
pub use overlay::{
    RenderInstructions,
    HandOverlay,
    Segment,
    Marker,
    MarkerKind,
    build_hand_overlay,
    colors,
};
pub use display::{DisplayState, status_message, NO_HANDS_MESSAGE};
pub use processor::{FrameProcessor, FrameOutput};
