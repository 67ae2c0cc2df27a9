//! Renderer module - tessellates overlay instructions for the JS canvas
//!
//! Re-exports only. All logic in submodules.

mod shapes;
mod overlay;

pub use shapes::{Vertex, VERTEX_FLOATS, create_circle_vertices, create_line_vertices, flatten};
pub use overlay::{build_overlay_vertices, to_clip_space};
