//! Binding indices shared between host code and `hello.wgsl`.

/// Vertex buffer slot carrying [`Vertex`](crate::geometry::Vertex) data.
pub const VERTEX_BUFFER_SLOT: u32 = 0;

/// Binding index (group 0) of the viewport-size uniform.
pub const VIEWPORT_SIZE_SLOT: u32 = 1;

/// Bind group holding the per-frame constants.
pub const CONSTANTS_GROUP: u32 = 0;

/// Entry point names in the bundled library.
pub const VERTEX_ENTRY: &str = "vertexShader";
pub const FRAGMENT_ENTRY: &str = "fragmentShader";
