//! Temporal smoother for the displayed finger count and handedness
//!
//! Per-frame classification flickers. The smoother keeps a short history
//! of raw readings for one hand slot and derives a steady display value
//! from it. Each stream owns its own instance.

use log::debug;
use serde::{Deserialize, Serialize};

use super::stats::{median, mode};
use super::window::HistoryWindow;
use crate::hand::Handedness;

/// Default number of frames kept in each history window
pub const DEFAULT_HISTORY: usize = 8;

/// Weight of the previous display value in the median blend
pub const BLEND_PREVIOUS: f32 = 0.6;

/// Weight of the window median in the median blend
pub const BLEND_MEDIAN: f32 = 0.4;

/// How the count window is reduced to one displayed count
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingPolicy {
    /// Most frequent raw count in the window
    Mode,
    /// Window median, exponentially blended with the previous display value
    #[default]
    MedianBlend,
}

/// Smoothed values shown to the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmoothedDisplay {
    pub count: u8,
    pub label: Handedness,
}

/// History windows plus the derived display state for one hand slot
#[derive(Clone, Debug)]
pub struct TemporalSmoother {
    counts: HistoryWindow<u8>,
    labels: HistoryWindow<Handedness>,
    policy: SmoothingPolicy,
    display: SmoothedDisplay,
}

impl TemporalSmoother {
    pub fn new(capacity: usize, policy: SmoothingPolicy) -> Self {
        Self {
            counts: HistoryWindow::new(capacity),
            labels: HistoryWindow::new(capacity),
            policy,
            display: SmoothedDisplay::default(),
        }
    }

    /// Record one frame's raw reading and recompute the display state
    pub fn observe(&mut self, count: u8, label: Handedness) -> SmoothedDisplay {
        self.counts.push(count);
        self.labels.push(label);

        let count = match self.policy {
            SmoothingPolicy::Mode => mode(self.counts.iter().copied()).unwrap_or(0),
            SmoothingPolicy::MedianBlend => {
                let window = self.counts.to_vec();
                let median = median(&window).unwrap_or(0.0);
                let previous = self.display.count as f32;
                (BLEND_PREVIOUS * previous + BLEND_MEDIAN * median).round().max(0.0) as u8
            }
        };

        let label = mode(self.labels.iter().copied()).unwrap_or_default();

        self.display = SmoothedDisplay { count, label };
        self.display
    }

    /// Drop all history; display falls back to 0 / Unknown
    pub fn reset(&mut self) {
        if !self.counts.is_empty() {
            debug!("Smoother reset after {} frames of history", self.counts.len());
        }
        self.counts.clear();
        self.labels.clear();
        self.display = SmoothedDisplay::default();
    }

    pub fn display(&self) -> SmoothedDisplay {
        self.display
    }

    pub fn policy(&self) -> SmoothingPolicy {
        self.policy
    }

    /// Switch aggregation policy; history is kept
    pub fn set_policy(&mut self, policy: SmoothingPolicy) {
        self.policy = policy;
    }

    pub fn capacity(&self) -> usize {
        self.counts.capacity()
    }

    /// Resize both windows, dropping the oldest entries when shrinking
    pub fn set_capacity(&mut self, capacity: usize) {
        self.counts.set_capacity(capacity);
        self.labels.set_capacity(capacity);
    }

    pub fn count_history(&self) -> Vec<u8> {
        self.counts.to_vec()
    }

    pub fn label_history(&self) -> Vec<Handedness> {
        self.labels.to_vec()
    }
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY, SmoothingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_policy_example() {
        let mut smoother = TemporalSmoother::new(8, SmoothingPolicy::Mode);
        let mut display = SmoothedDisplay::default();
        for count in [5, 5, 4, 5, 4, 4, 5] {
            display = smoother.observe(count, Handedness::Right);
        }
        assert_eq!(display.count, 5);
        assert_eq!(display.label, Handedness::Right);
    }

    #[test]
    fn test_mode_ignores_single_outlier() {
        let mut smoother = TemporalSmoother::new(6, SmoothingPolicy::Mode);
        for count in [3, 3, 3, 3, 3] {
            smoother.observe(count, Handedness::Left);
        }
        assert_eq!(smoother.observe(0, Handedness::Left).count, 3);
    }

    #[test]
    fn test_median_blend_ramps_up() {
        let mut smoother = TemporalSmoother::new(8, SmoothingPolicy::MedianBlend);
        let shown: Vec<u8> = (0..5)
            .map(|_| smoother.observe(5, Handedness::Left).count)
            .collect();
        // round(0.6 × shown + 0.4 × 5): 2.0, 3.2, 3.8, 4.4, 4.4
        assert_eq!(shown, vec![2, 3, 4, 4, 4]);
    }

    #[test]
    fn test_median_blend_damps_outlier() {
        let mut smoother = TemporalSmoother::new(8, SmoothingPolicy::MedianBlend);
        for _ in 0..20 {
            smoother.observe(2, Handedness::Left);
        }
        let settled = smoother.display().count;
        // One 5 in a window of 2s leaves the median at 2
        assert_eq!(smoother.observe(5, Handedness::Left).count, settled);
    }

    #[test]
    fn test_median_blend_follows_previous_display() {
        let mut smoother = TemporalSmoother::new(8, SmoothingPolicy::MedianBlend);
        let mut expected = 0u8;
        for _ in 0..10 {
            let shown = smoother.observe(5, Handedness::Right).count;
            expected = (0.6 * expected as f32 + 0.4 * 5.0).round() as u8;
            assert_eq!(shown, expected);
        }
        // Rounding holds the display one short of a steady 5
        assert_eq!(smoother.display().count, 4);
    }

    #[test]
    fn test_window_bounded() {
        let mut smoother = TemporalSmoother::new(6, SmoothingPolicy::Mode);
        for i in 0..14u8 {
            smoother.observe(i % 6, Handedness::Left);
        }
        assert_eq!(smoother.count_history().len(), 6);
        assert_eq!(smoother.label_history().len(), 6);
        assert_eq!(smoother.count_history(), vec![2, 3, 4, 5, 0, 1]);
    }

    #[test]
    fn test_label_mode() {
        let mut smoother = TemporalSmoother::default();
        smoother.observe(1, Handedness::Left);
        smoother.observe(1, Handedness::Right);
        let display = smoother.observe(1, Handedness::Left);
        assert_eq!(display.label, Handedness::Left);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut smoother = TemporalSmoother::default();
        for _ in 0..5 {
            smoother.observe(4, Handedness::Right);
        }
        smoother.reset();
        assert!(smoother.count_history().is_empty());
        assert!(smoother.label_history().is_empty());
        assert_eq!(smoother.display(), SmoothedDisplay { count: 0, label: Handedness::Unknown });

        // Blend restarts from zero
        assert_eq!(smoother.observe(5, Handedness::Right).count, 2);
    }

    #[test]
    fn test_shrinking_capacity_keeps_recent() {
        let mut smoother = TemporalSmoother::new(8, SmoothingPolicy::Mode);
        for count in [1, 1, 1, 1, 1, 4, 4] {
            smoother.observe(count, Handedness::Left);
        }
        smoother.set_capacity(3);
        assert_eq!(smoother.count_history(), vec![1, 4, 4]);
        assert_eq!(smoother.observe(4, Handedness::Left).count, 4);
    }
}
