//! Detector output for one video frame
//!
//! Accepts either the hand landmarker's result object serialized to JSON,
//! or the flat Float32Array layout used for landmark transfer.

use serde::Deserialize;

use crate::error::{OverlayError, Result};
use crate::hand::{HandPose, Handedness, Landmark};

/// One hand as reported by the detector
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectedHand {
    pub pose: HandPose,
    /// Raw detector label, before any mirroring
    pub handedness: Option<Handedness>,
}

/// All hands found in one frame, in detector order
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    pub hands: Vec<DetectedHand>,
    /// Frame size in pixels, used to normalize pixel-space landmarks
    pub frame_width: f32,
    pub frame_height: f32,
}

// ============================================================================
// JSON LAYOUT
// ============================================================================

#[derive(Deserialize)]
struct RawCategory {
    #[serde(alias = "categoryName", alias = "label")]
    category_name: String,
}

#[derive(Deserialize)]
struct RawDetection {
    #[serde(default)]
    landmarks: Vec<Vec<Landmark>>,
    #[serde(default, alias = "handednesses", alias = "multiHandedness")]
    handedness: Vec<Vec<RawCategory>>,
}

fn check_frame_size(width: f32, height: f32) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(OverlayError::InvalidFrameSize { width, height })
    }
}

impl DetectionResult {
    /// A frame in which the detector found nothing
    pub fn empty(frame_width: f32, frame_height: f32) -> Self {
        Self {
            hands: Vec::new(),
            frame_width,
            frame_height,
        }
    }

    /// Parse `{"landmarks": [[{x, y, z?}, ...]], "handedness": [[{"categoryName": ...}]]}`
    ///
    /// Only the top category of each hand's handedness list is used.
    pub fn from_json(json: &str, frame_width: f32, frame_height: f32) -> Result<Self> {
        check_frame_size(frame_width, frame_height)?;
        let raw: RawDetection = serde_json::from_str(json)?;

        let hands = raw
            .landmarks
            .into_iter()
            .enumerate()
            .map(|(i, points)| DetectedHand {
                pose: HandPose::from_points(points),
                handedness: raw
                    .handedness
                    .get(i)
                    .and_then(|categories| categories.first())
                    .map(|c| Handedness::parse(&c.category_name)),
            })
            .collect();

        Ok(Self {
            hands,
            frame_width,
            frame_height,
        })
    }

    /// Build from a flat array of `dims` floats per landmark
    ///
    /// - `counts[h]`: landmark count of hand `h`
    /// - `labels[h]`: handedness of hand `h`, missing entries are unlabeled
    pub fn from_flat(
        flat_data: &[f32],
        dims: usize,
        counts: &[u32],
        labels: &[String],
        frame_width: f32,
        frame_height: f32,
    ) -> Result<Self> {
        check_frame_size(frame_width, frame_height)?;
        if dims != 2 && dims != 3 {
            return Err(OverlayError::UnsupportedDimensions(dims));
        }

        let expected = counts.iter().map(|&c| c as usize).sum::<usize>() * dims;
        if flat_data.len() != expected {
            return Err(OverlayError::FlatDataLength {
                expected,
                actual: flat_data.len(),
            });
        }

        let mut hands = Vec::with_capacity(counts.len());
        let mut chunks = flat_data.chunks_exact(dims);

        for (h, &count) in counts.iter().enumerate() {
            let points = chunks
                .by_ref()
                .take(count as usize)
                .map(|c| Landmark::new(c[0], c[1], if dims == 3 { c[2] } else { 0.0 }))
                .collect();

            hands.push(DetectedHand {
                pose: HandPose::from_points(points),
                handedness: labels.get(h).map(|l| Handedness::parse(l)),
            });
        }

        Ok(Self {
            hands,
            frame_width,
            frame_height,
        })
    }
}
