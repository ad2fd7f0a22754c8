//! Shader library loading and entry point resolution.
//!
//! WGSL is parsed and validated with `naga` when the library is loaded, so a
//! misspelled entry point or a missing viewport binding is reported as a
//! [`ShaderError`] instead of a device validation failure later on.

mod error;
mod library;
pub mod slots;

pub use error::ShaderError;
pub use library::{EntryPoint, FragmentStage, ShaderLibrary, Stage, VertexStage};
