//! Pipeline construction and the per-frame drawer.
//!
//! [`FrameState::plan`] decides what a frame encodes without touching the GPU;
//! [`Renderer`] owns the GPU objects and carries the plan out.

mod error;
mod pipeline;
mod plan;
mod renderer;

pub use error::PipelineError;
pub use pipeline::{HelloPipeline, ShaderPair};
pub use plan::{DrawCall, FramePlan, FrameSink, FrameState, SkipReason};
pub use renderer::Renderer;
