//! Geometry module - joint angles between landmarks
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::joint_angle;
