//! Frame processor - drives one detector result through the pipeline
//!
//! Selects hands, normalizes coordinates, corrects handedness for the
//! mirrored view, classifies fingers and feeds hand #0 into the smoother.
//! Nothing in here fails: bad hands are skipped, a failed detector counts
//! as an empty frame.

use log::{debug, warn};

use super::detection::DetectionResult;
use super::display::DisplayState;
use super::normalize::normalize_pose;
use super::overlay::{build_hand_overlay, RenderInstructions};
use crate::classifier::classify;
use crate::config::OverlayConfig;
use crate::smoothing::TemporalSmoother;

/// Result of processing one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub render: RenderInstructions,
    pub display: DisplayState,
}

/// Per-stream pipeline state. One instance per camera stream.
pub struct FrameProcessor {
    config: OverlayConfig,
    smoother: TemporalSmoother,
    last_display: DisplayState,
}

impl FrameProcessor {
    pub fn new(config: OverlayConfig) -> Self {
        let smoother = TemporalSmoother::new(config.history_capacity, config.smoothing);
        Self {
            config,
            smoother,
            last_display: DisplayState::no_hands(),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the configuration; applies from the next frame
    ///
    /// Smoothing history survives capacity and policy changes.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.smoother.set_capacity(config.history_capacity);
        self.smoother.set_policy(config.smoothing);
        self.config = config;
    }

    /// Mutate the configuration in place
    pub fn update_config(&mut self, update: impl FnOnce(&mut OverlayConfig)) {
        let mut config = self.config.clone();
        update(&mut config);
        self.set_config(config);
    }

    pub fn smoother(&self) -> &TemporalSmoother {
        &self.smoother
    }

    /// Display state from the most recent frame
    pub fn display(&self) -> &DisplayState {
        &self.last_display
    }

    /// Clear smoothing history without waiting for an empty frame
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.last_display = DisplayState::no_hands();
    }

    /// Process one frame of detector output
    pub fn process_frame(&mut self, result: &DetectionResult) -> FrameOutput {
        let detected = result.hands.len();
        let mirror = self.config.mirror;

        if detected == 0 {
            self.reset();
            return FrameOutput {
                render: RenderInstructions::empty(mirror),
                display: self.last_display.clone(),
            };
        }

        let selected = detected.min(self.config.max_hands());
        let mut render = RenderInstructions::empty(mirror);

        for (slot, hand) in result.hands.iter().take(selected).enumerate() {
            if !hand.pose.is_complete() {
                debug!(
                    "Skipping hand {}: {} landmarks (expected 21)",
                    slot,
                    hand.pose.len()
                );
                continue;
            }

            let mut pose = hand.pose.clone();
            normalize_pose(
                &mut pose,
                self.config.coordinate_space,
                result.frame_width,
                result.frame_height,
            );

            let raw_label = hand.handedness.unwrap_or_default();
            let label = if mirror { raw_label.mirrored() } else { raw_label };

            let extension = classify(&pose);

            // Only the first listed hand drives the smoothed display
            if slot == 0 {
                self.smoother.observe(extension.count(), label);
            }

            render.hands.push(build_hand_overlay(
                slot,
                &pose,
                extension,
                label,
                self.config.show_skeleton,
            ));
        }

        self.last_display = DisplayState::new(self.smoother.display(), detected);

        FrameOutput {
            render,
            display: self.last_display.clone(),
        }
    }

    /// Detector threw for this frame: log it and carry on as if empty
    pub fn report_detector_failure(&mut self, reason: &str) -> FrameOutput {
        warn!("Hand detector failed, treating frame as empty: {}", reason);
        self.process_frame(&DetectionResult::empty(0.0, 0.0))
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}
