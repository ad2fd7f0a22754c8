//! Host-side geometry shared with the shaders.
//!
//! Positions are in pixels measured from the center of the view, +X right,
//! +Y up. The vertex shader divides by half the viewport size to reach clip space.

mod color;
mod primitive;
mod vertex;
mod viewport;

pub use color::ColorRgba;
pub use primitive::{Primitive, QUAD_VERTICES, TRIANGLE_VERTICES};
pub use vertex::Vertex;
pub use viewport::ViewportSize;
