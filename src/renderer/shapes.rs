//! Shape primitives - vertices for circles and lines

/// Vertex handed to the JS canvas as 6 packed f32s
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// f32 components per vertex
pub const VERTEX_FLOATS: usize = std::mem::size_of::<Vertex>() / std::mem::size_of::<f32>();

/// Fewest rim points that still read as a dot
const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Generate vertices for a filled disc (triangle list, one wedge per segment)
///
/// `segments` below 3 is raised to 3.
pub fn create_circle_vertices(
    center: (f32, f32),
    radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(MIN_CIRCLE_SEGMENTS);
    let (cx, cy) = center;

    let rim: Vec<[f32; 2]> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            [cx + radius * angle.cos(), cy + radius * angle.sin()]
        })
        .collect();

    rim.windows(2)
        .flat_map(|edge| {
            [
                Vertex { position: [cx, cy], color },
                Vertex { position: edge[0], color },
                Vertex { position: edge[1], color },
            ]
        })
        .collect()
}

/// Generate vertices for a line segment (two triangles)
///
/// Zero-length segments produce nothing.
pub fn create_line_vertices(
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 {
        return vec![];
    }

    // Perpendicular offset for thickness
    let px = -dy / len * width;
    let py = dx / len * width;

    vec![
        Vertex { position: [x1 - px, y1 - py], color },
        Vertex { position: [x1 + px, y1 + py], color },
        Vertex { position: [x2 + px, y2 + py], color },

        Vertex { position: [x1 - px, y1 - py], color },
        Vertex { position: [x2 + px, y2 + py], color },
        Vertex { position: [x2 - px, y2 - py], color },
    ]
}

/// Flatten vertices into the Float32Array layout the canvas expects
pub fn flatten(vertices: &[Vertex]) -> Vec<f32> {
    bytemuck::cast_slice::<Vertex, f32>(vertices).to_vec()
}
