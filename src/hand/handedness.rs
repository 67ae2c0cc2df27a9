//! Handedness labels reported by the detector

use serde::{Deserialize, Serialize};

/// Which hand the detector believes it saw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    /// Parse a detector category name. Anything unrecognized is Unknown.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("left") {
            Handedness::Left
        } else if label.eq_ignore_ascii_case("right") {
            Handedness::Right
        } else {
            Handedness::Unknown
        }
    }

    /// Swap Left and Right
    ///
    /// The detector labels the subject's own hand. In a selfie view the
    /// picture is flipped, so the label has to be flipped with it.
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
            Handedness::Unknown => Handedness::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
            Handedness::Unknown => "Unknown",
        }
    }
}
