//! Window + display loop.
//!
//! Owns the `winit` EventLoop and the single Window, and wires them to the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
