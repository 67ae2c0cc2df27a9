//! Coordinate normalization
//!
//! Detectors report landmarks either relative to the frame (0-1) or in
//! pixels. Everything downstream works in normalized space.

use crate::config::CoordinateSpace;
use crate::hand::HandPose;

/// Any x/y component above this marks a hand as pixel space in `Auto` mode
pub const PIXEL_SPACE_THRESHOLD: f32 = 1.5;

/// Heuristic pixel-space check
///
/// A hand at the far edge of a normalized frame can overshoot 1.0 a
/// little, never 1.5. Detectors that know their convention should set it
/// explicitly instead.
pub fn is_pixel_space(pose: &HandPose) -> bool {
    pose.points()
        .iter()
        .any(|lm| lm.x.abs() > PIXEL_SPACE_THRESHOLD || lm.y.abs() > PIXEL_SPACE_THRESHOLD)
}

/// Convert `pose` to normalized coordinates in place
///
/// Returns true if the pose was treated as pixel space. z is scaled by the
/// frame width, the same scale the detector uses for normalized depth.
pub fn normalize_pose(
    pose: &mut HandPose,
    space: CoordinateSpace,
    frame_width: f32,
    frame_height: f32,
) -> bool {
    let pixels = match space {
        CoordinateSpace::Normalized => false,
        CoordinateSpace::Pixel => true,
        CoordinateSpace::Auto => is_pixel_space(pose),
    };

    if !pixels || frame_width <= 0.0 || frame_height <= 0.0 {
        return false;
    }

    for lm in pose.points_mut() {
        lm.x /= frame_width;
        lm.y /= frame_height;
        lm.z /= frame_width;
    }

    true
}
