//! Classifier module - finger extension from hand landmarks
//!
//! Re-exports only. All logic in submodules.

mod fingers;

pub use fingers::{
    classify,
    finger_angle,
    ExtensionVector,
    Finger,
    THUMB_EXTENDED_DEG,
    FINGER_EXTENDED_DEG,
};
