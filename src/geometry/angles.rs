//! Joint angle calculation using dot product
//!
//! Calculates the angle at a joint from the two rays joint→parent and
//! joint→child, in full 3D.

use crate::hand::Landmark;

/// Vectors shorter than this are treated as zero-length
const MIN_MAGNITUDE: f32 = 1e-6;

/// Calculate the angle at `joint` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees:
/// - 180° = fully straight (points collinear, joint in the middle)
/// - 90° = right-angle bend
/// - 0° = folded back onto itself, or degenerate input
pub fn joint_angle(parent: Landmark, joint: Landmark, child: Landmark) -> f32 {
    // Vector from joint to parent
    let v1 = parent.sub(joint);

    // Vector from joint to child
    let v2 = child.sub(joint);

    let mag1 = v1.length();
    let mag2 = v2.length();

    // Coincident points: no direction to measure against
    if mag1 < MIN_MAGNITUDE || mag2 < MIN_MAGNITUDE {
        return 0.0;
    }

    // Clamp guards acos against floating point overshoot
    let cos_angle = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: f32, y: f32, z: f32) -> Landmark {
        Landmark::new(x, y, z)
    }

    #[test]
    fn test_straight_joint() {
        let angle = joint_angle(lm(0.0, 0.0, 0.0), lm(0.0, 1.0, 0.0), lm(0.0, 2.0, 0.0));
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_straight_joint_in_depth() {
        let angle = joint_angle(lm(0.1, 0.2, -0.3), lm(0.2, 0.3, -0.2), lm(0.4, 0.5, 0.0));
        assert!((angle - 180.0).abs() < 0.1);
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle(lm(0.0, 0.0, 0.0), lm(0.5, 0.0, 0.0), lm(0.5, 0.5, 0.0));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle_out_of_plane() {
        // Bend happens purely along z, invisible in 2D
        let angle = joint_angle(lm(0.0, 0.0, 0.0), lm(0.0, 0.5, 0.0), lm(0.0, 0.5, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_coincident_points() {
        let p = lm(0.3, 0.3, 0.1);
        assert_eq!(joint_angle(p, p, p), 0.0);
        assert_eq!(joint_angle(p, p, lm(0.5, 0.5, 0.0)), 0.0);
        assert_eq!(joint_angle(lm(0.5, 0.5, 0.0), p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = lm(0.12, 0.8, 0.05);
        let b = lm(0.4, 0.45, -0.02);
        let c = lm(0.9, 0.61, 0.1);
        assert_eq!(joint_angle(a, b, c), joint_angle(c, b, a));
    }

    #[test]
    fn test_range() {
        let angle = joint_angle(lm(1.0, 0.0, 0.0), lm(0.0, 0.0, 0.0), lm(1.0, 1e-4, 0.0));
        assert!((0.0..=180.0).contains(&angle));
        assert!(angle < 1.0);
    }
}
