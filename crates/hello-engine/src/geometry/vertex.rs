use bytemuck::{Pod, Zeroable};

use super::ColorRgba;

/// One vertex as laid out in the vertex buffer.
///
/// Must stay in sync with `VertexInput` in `shader/hello.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Pixels from the view center.
    pub position: [f32; 2],
    /// Linear RGBA.
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(x: f32, y: f32, color: ColorRgba) -> Self {
        Self {
            position: [x, y],
            color: color.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
