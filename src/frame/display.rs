//! Display state handed to the UI each frame

use serde::Serialize;

use crate::hand::Handedness;
use crate::smoothing::SmoothedDisplay;

pub const NO_HANDS_MESSAGE: &str = "No hands detected";

/// Smoothed count and label plus a detection status line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub finger_count: u8,
    pub hand_label: Handedness,
    pub status_message: String,
}

impl DisplayState {
    pub fn new(smoothed: SmoothedDisplay, detected_hands: usize) -> Self {
        Self {
            finger_count: smoothed.count,
            hand_label: smoothed.label,
            status_message: status_message(detected_hands),
        }
    }

    pub fn no_hands() -> Self {
        Self::new(SmoothedDisplay::default(), 0)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::no_hands()
    }
}

/// Status line for the number of hands the detector reported
pub fn status_message(detected_hands: usize) -> String {
    match detected_hands {
        0 => NO_HANDS_MESSAGE.to_string(),
        n => format!("Detected {} hand(s)", n),
    }
}
