//! Hand module - landmark schema and handedness labels
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod handedness;

pub use landmarks::{
    Landmark,
    HandPose,
    // Constants
    LANDMARK_COUNT,
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
    FINGERTIPS, HAND_CONNECTIONS,
};
pub use handedness::Handedness;
