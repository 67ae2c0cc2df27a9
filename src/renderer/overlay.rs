//! Overlay tessellation - turns render instructions into triangles

use super::shapes::{create_circle_vertices, create_line_vertices, Vertex};
use crate::frame::{colors, RenderInstructions};

const BONE_WIDTH: f32 = 0.006;
const JOINT_RADIUS: f32 = 0.012;
const TIP_RADIUS: f32 = 0.022;
const CIRCLE_SEGMENTS: u32 = 12;

/// Convert normalized landmark (0-1) to clip space (-1 to 1), flip Y
///
/// Mirrored views also flip X so the overlay matches the flipped video.
pub fn to_clip_space(x: f32, y: f32, mirrored: bool) -> (f32, f32) {
    let x = if mirrored { 1.0 - x } else { x };
    (x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}

/// Triangles for every hand in the frame, bones first so joints draw on top
pub fn build_overlay_vertices(render: &RenderInstructions) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let clip = |p: [f32; 2]| to_clip_space(p[0], p[1], render.mirrored);

    for hand in &render.hands {
        for segment in &hand.segments {
            vertices.extend(create_line_vertices(
                clip(segment.from),
                clip(segment.to),
                BONE_WIDTH,
                colors::CYAN,
            ));
        }

        for marker in &hand.markers {
            let radius = if marker.kind.is_tip() { TIP_RADIUS } else { JOINT_RADIUS };
            vertices.extend(create_circle_vertices(
                clip(marker.position),
                radius,
                marker.color,
                CIRCLE_SEGMENTS,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{HandOverlay, Marker, MarkerKind, Segment};
    use crate::classifier::ExtensionVector;
    use crate::hand::Handedness;

    #[test]
    fn test_clip_space() {
        assert_eq!(to_clip_space(0.5, 0.5, false), (0.0, 0.0));
        assert_eq!(to_clip_space(0.0, 0.0, false), (-1.0, 1.0));
        assert_eq!(to_clip_space(0.0, 1.0, true), (1.0, -1.0));
    }

    #[test]
    fn test_vertex_count() {
        let kind = MarkerKind::TipExtended;
        let render = RenderInstructions {
            mirrored: true,
            hands: vec![HandOverlay {
                slot: 0,
                label: Handedness::Left,
                extension: ExtensionVector::default(),
                finger_count: 0,
                segments: vec![Segment { from: [0.1, 0.1], to: [0.2, 0.2] }],
                markers: vec![Marker {
                    landmark: 8,
                    position: [0.25, 0.5],
                    kind,
                    color: kind.color(),
                }],
            }],
        };
        let vertices = build_overlay_vertices(&render);
        assert_eq!(vertices.len(), 6 + 3 * CIRCLE_SEGMENTS as usize);
        // Marker fan center is first vertex after the bone quad, flipped in X
        assert_eq!(vertices[6].position, [0.5, 0.0]);
        assert_eq!(vertices[6].color, colors::GREEN);
    }

    #[test]
    fn test_empty_frame_draws_nothing() {
        assert!(build_overlay_vertices(&RenderInstructions::empty(false)).is_empty());
    }
}
