//! Render instructions for one frame
//!
//! Positions stay in normalized landmark space. The consumer applies the
//! horizontal flip when `mirrored` is set.

use serde::Serialize;

use crate::classifier::{ExtensionVector, Finger};
use crate::hand::{HandPose, Handedness, FINGERTIPS, HAND_CONNECTIONS};

/// Colors for overlay markers (RGBA)
pub mod colors {
    /// Extended fingertip
    pub const GREEN: [f32; 4] = [0.2, 1.0, 0.4, 1.0];
    /// Curled fingertip
    pub const RED: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    /// Non-tip joints
    pub const WHITE: [f32; 4] = [0.95, 0.95, 0.95, 0.9];
    /// Bone connectors
    pub const CYAN: [f32; 4] = [0.2, 0.9, 0.9, 0.7];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Joint,
    TipExtended,
    TipCurled,
}

impl MarkerKind {
    pub fn color(&self) -> [f32; 4] {
        match self {
            MarkerKind::Joint => colors::WHITE,
            MarkerKind::TipExtended => colors::GREEN,
            MarkerKind::TipCurled => colors::RED,
        }
    }

    pub fn is_tip(&self) -> bool {
        !matches!(self, MarkerKind::Joint)
    }
}

/// Bone connector between two landmarks
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

/// Dot drawn on a landmark
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub landmark: usize,
    pub position: [f32; 2],
    pub kind: MarkerKind,
    pub color: [f32; 4],
}

/// Everything drawn for one analyzed hand
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HandOverlay {
    /// Position in the detector's hand list
    pub slot: usize,
    pub label: Handedness,
    pub extension: ExtensionVector,
    pub finger_count: u8,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderInstructions {
    pub mirrored: bool,
    pub hands: Vec<HandOverlay>,
}

impl RenderInstructions {
    pub fn empty(mirrored: bool) -> Self {
        Self {
            mirrored,
            hands: Vec::new(),
        }
    }
}

/// Build the overlay for one complete hand
///
/// Skeleton mode draws every bone and joint; otherwise only the five
/// fingertips are marked. Tips are colored by extension state either way.
pub fn build_hand_overlay(
    slot: usize,
    pose: &HandPose,
    extension: ExtensionVector,
    label: Handedness,
    show_skeleton: bool,
) -> HandOverlay {
    let xy = |i: usize| pose.get(i).map(|lm| [lm.x, lm.y]);

    let tip_kind = |i: usize| -> Option<MarkerKind> {
        let finger = FINGERTIPS.iter().position(|&tip| tip == i)?;
        Some(if extension.is_extended(Finger::ALL[finger]) {
            MarkerKind::TipExtended
        } else {
            MarkerKind::TipCurled
        })
    };

    let mut segments = Vec::new();
    let mut markers = Vec::new();

    if show_skeleton {
        for &(a, b) in HAND_CONNECTIONS.iter() {
            if let (Some(from), Some(to)) = (xy(a), xy(b)) {
                segments.push(Segment { from, to });
            }
        }

        for i in 0..pose.len() {
            let kind = tip_kind(i).unwrap_or(MarkerKind::Joint);
            if let Some(position) = xy(i) {
                markers.push(Marker { landmark: i, position, kind, color: kind.color() });
            }
        }
    } else {
        for &tip in FINGERTIPS.iter() {
            if let (Some(position), Some(kind)) = (xy(tip), tip_kind(tip)) {
                markers.push(Marker { landmark: tip, position, kind, color: kind.color() });
            }
        }
    }

    HandOverlay {
        slot,
        label,
        extension,
        finger_count: extension.count(),
        segments,
        markers,
    }
}
