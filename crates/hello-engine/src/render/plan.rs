use crate::core::AppControl;
use crate::device::SurfaceErrorAction;
use crate::geometry::{Primitive, Vertex, ViewportSize};
use crate::shader::slots::{CONSTANTS_GROUP, VERTEX_BUFFER_SLOT};

/// Why a frame encodes no draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SkipReason {
    /// No drawable was available (surface lost, outdated, timed out or zero-sized).
    NoDrawable,
    /// The stored viewport has a zero dimension.
    EmptyViewport,
}

/// Everything the drawer encodes for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub viewport: ViewportSize,
    pub vertices: &'static [Vertex],
    pub vertex_slot: u32,
    /// Bind group index of the viewport uniform.
    pub constants_group: u32,
}

impl DrawCall {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

/// The drawer's decision for one frame.
///
/// Either way the frame's command buffer is submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePlan {
    Draw(DrawCall),
    Skip(SkipReason),
}

impl FramePlan {
    pub fn draw_call(&self) -> Option<&DrawCall> {
        match self {
            FramePlan::Draw(call) => Some(call),
            FramePlan::Skip(_) => None,
        }
    }
}

/// One frame's command buffer, as seen by [`FrameState::drive`].
pub trait FrameSink {
    fn has_drawable(&self) -> bool;

    fn surface_error(&self) -> Option<SurfaceErrorAction>;

    /// Records `call` into the frame.
    fn encode(&mut self, call: &DrawCall);

    /// Releases the drawable without presenting it.
    fn discard_drawable(&mut self);

    /// Commits the command buffer, presenting the drawable if one is held.
    fn submit(self);
}

/// CPU-side renderer state: what to draw and the last reported viewport size.
#[derive(Debug, Clone)]
pub struct FrameState {
    primitive: Primitive,
    viewport: ViewportSize,
}

impl FrameState {
    pub fn new(primitive: Primitive, viewport: ViewportSize) -> Self {
        Self {
            primitive,
            viewport,
        }
    }

    #[inline]
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    #[inline]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Stores the new size verbatim for subsequent frames.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = ViewportSize::new(width, height);
    }

    /// Plans one frame given whether a drawable was acquired.
    pub fn plan(&self, has_drawable: bool) -> FramePlan {
        if !has_drawable {
            return FramePlan::Skip(SkipReason::NoDrawable);
        }
        if self.viewport.is_empty() {
            return FramePlan::Skip(SkipReason::EmptyViewport);
        }

        FramePlan::Draw(DrawCall {
            viewport: self.viewport,
            vertices: self.primitive.vertices(),
            vertex_slot: VERTEX_BUFFER_SLOT,
            constants_group: CONSTANTS_GROUP,
        })
    }

    /// Plans, encodes and submits one frame into `sink`.
    ///
    /// `sink` is submitted whether or not a draw was encoded.
    pub fn drive<S: FrameSink>(&self, mut sink: S) -> AppControl {
        match self.plan(sink.has_drawable()) {
            FramePlan::Draw(call) => sink.encode(&call),
            FramePlan::Skip(reason) => {
                log::debug!("frame skipped: {reason:?}");
                sink.discard_drawable();
            }
        }

        let fatal = sink.surface_error() == Some(SurfaceErrorAction::Fatal);
        sink.submit();

        if fatal {
            log::error!("surface out of memory; stopping");
            return AppControl::Exit;
        }
        AppControl::Continue
    }
}
