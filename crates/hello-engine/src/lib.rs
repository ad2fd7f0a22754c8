//! Hello engine crate.
//!
//! Device setup, the single render pipeline and the per-frame drawer shared by
//! the `hello-triangle` and `hello-quad` samples.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod sample;
pub mod shader;
pub mod window;
