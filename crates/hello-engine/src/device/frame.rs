use super::SurfaceErrorAction;

/// The presentable texture for one frame.
pub struct Drawable {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl Drawable {
    /// Size of the backing texture in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let texture = &self.surface_texture.texture;
        (texture.width(), texture.height())
    }
}

/// One frame's worth of recording state.
///
/// The encoder is always present so the frame can be submitted even when no
/// drawable could be acquired. Holding the drawable blocks acquisition of the
/// next one, so frames must be submitted promptly.
pub struct GpuFrame {
    pub encoder: wgpu::CommandEncoder,
    pub drawable: Option<Drawable>,
    /// Set when acquiring the drawable failed.
    pub surface_error: Option<SurfaceErrorAction>,
}

impl GpuFrame {
    #[inline]
    pub fn has_drawable(&self) -> bool {
        self.drawable.is_some()
    }

    /// Releases the drawable without presenting it.
    pub fn discard_drawable(&mut self) {
        self.drawable = None;
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.surface_error == Some(SurfaceErrorAction::Fatal)
    }
}
