//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for one window
//! - choosing and configuring the surface format
//! - handing out one [`GpuFrame`] per redraw and submitting it

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::{Drawable, GpuFrame};
pub use init::GpuInit;
