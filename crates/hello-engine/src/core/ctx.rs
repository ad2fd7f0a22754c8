use winit::window::Window;

use crate::device::{Gpu, GpuFrame};

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    #[inline]
    pub fn begin_frame(&mut self) -> GpuFrame {
        self.gpu.begin_frame()
    }

    /// Submits `frame`, notifying the window first when it carries a drawable.
    pub fn submit(&mut self, frame: GpuFrame) {
        if frame.has_drawable() {
            self.window.pre_present_notify();
        }
        self.gpu.submit(frame);
    }
}
