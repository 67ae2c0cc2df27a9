//! Finger extension classification from joint angles
//!
//! A straight finger measures close to 180° at its middle joint; a curled
//! finger bends sharply there. Each finger is judged on its own, so a
//! missing landmark only costs that finger.

use serde::Serialize;

use crate::geometry::joint_angle;
use crate::hand::{
    HandPose,
    THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_TIP,
};

/// Thumb IP angle (degrees) above which the thumb counts as extended
pub const THUMB_EXTENDED_DEG: f32 = 150.0;

/// PIP angle (degrees) above which a finger counts as extended
pub const FINGER_EXTENDED_DEG: f32 = 160.0;

/// The five digits, in reporting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Landmark triple whose middle point is the measured joint
    ///
    /// Long fingers skip the DIP and measure MCP→PIP→TIP directly.
    pub fn joint_triple(self) -> (usize, usize, usize) {
        match self {
            Finger::Thumb => (THUMB_MCP, THUMB_IP, THUMB_TIP),
            Finger::Index => (INDEX_MCP, INDEX_PIP, INDEX_TIP),
            Finger::Middle => (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
            Finger::Ring => (RING_MCP, RING_PIP, RING_TIP),
            Finger::Pinky => (PINKY_MCP, PINKY_PIP, PINKY_TIP),
        }
    }

    pub fn threshold_deg(self) -> f32 {
        match self {
            Finger::Thumb => THUMB_EXTENDED_DEG,
            _ => FINGER_EXTENDED_DEG,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Per-finger extension flags (thumb, index, middle, ring, pinky)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionVector {
    pub fingers: [bool; 5],
}

impl ExtensionVector {
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.fingers[finger.index()]
    }

    /// Number of extended fingers (0-5)
    pub fn count(&self) -> u8 {
        self.fingers.iter().filter(|&&extended| extended).count() as u8
    }

    pub fn all_curled(&self) -> bool {
        self.count() == 0
    }
}

/// Angle at the finger's measured joint, or None if a landmark is missing
pub fn finger_angle(hand: &HandPose, finger: Finger) -> Option<f32> {
    let (a, b, c) = finger.joint_triple();
    Some(joint_angle(hand.get(a)?, hand.get(b)?, hand.get(c)?))
}

/// Classify which fingers are extended
pub fn classify(hand: &HandPose) -> ExtensionVector {
    let mut result = ExtensionVector::default();

    for finger in Finger::ALL {
        result.fingers[finger.index()] = match finger_angle(hand, finger) {
            Some(angle) => angle > finger.threshold_deg(),
            None => false,
        };
    }

    result
}
