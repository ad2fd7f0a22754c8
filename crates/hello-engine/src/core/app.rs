use winit::event::WindowEvent;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Callbacks the runtime drives for the single window.
///
/// Order: `on_gpu_ready` once, then any number of `on_resize` / `on_frame`
/// calls. If `on_gpu_ready` fails the runtime logs the error, keeps the window
/// open and never calls `on_frame`.
pub trait App {
    /// Called once the device, queue and surface exist.
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()>;

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called with the new drawable size in physical pixels.
    fn on_resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
