//! Smoothing module - temporal filtering of per-frame hand readings
//!
//! Re-exports only. All logic in submodules.

mod window;
mod stats;
mod smoother;

pub use window::HistoryWindow;
pub use stats::{median, mode};
pub use smoother::{
    TemporalSmoother,
    SmoothingPolicy,
    SmoothedDisplay,
    DEFAULT_HISTORY,
    BLEND_PREVIOUS,
    BLEND_MEDIAN,
};
