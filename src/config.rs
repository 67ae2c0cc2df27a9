//! Overlay configuration
//!
//! User-togglable flags plus smoothing parameters. Flags can flip between
//! any two frames and apply from the next processed frame.

use serde::{Deserialize, Serialize};

use crate::smoothing::{SmoothingPolicy, DEFAULT_HISTORY};

/// How the detector's landmark coordinates should be interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// Guess per hand: any x/y above 1.5 means pixels
    #[default]
    Auto,
    /// Already 0-1 relative to frame size
    Normalized,
    /// Pixels; divided by frame width/height
    Pixel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Full bone skeleton instead of fingertip dots only
    pub show_skeleton: bool,
    /// Process up to two hands instead of one
    pub multi_hand: bool,
    /// Selfie-style flipped view; also swaps Left/Right labels
    pub mirror: bool,
    /// Frames kept in each smoothing window
    pub history_capacity: usize,
    pub smoothing: SmoothingPolicy,
    pub coordinate_space: CoordinateSpace,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_skeleton: true,
            multi_hand: false,
            mirror: true,
            history_capacity: DEFAULT_HISTORY,
            smoothing: SmoothingPolicy::default(),
            coordinate_space: CoordinateSpace::default(),
        }
    }
}

impl OverlayConfig {
    /// Upper bound on hands analyzed per frame
    pub fn max_hands(&self) -> usize {
        if self.multi_hand { 2 } else { 1 }
    }
}
