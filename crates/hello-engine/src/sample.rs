//! The app both sample binaries run.

use anyhow::Context;
use winit::dpi::LogicalSize;

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::geometry::{ColorRgba, Primitive};
use crate::render::Renderer;
use crate::window::{Runtime, RuntimeConfig};

/// What a sample draws.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub primitive: Primitive,
    pub clear_color: ColorRgba,
}

impl SampleConfig {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            ..Self::default()
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            primitive: Primitive::Triangle,
            clear_color: ColorRgba::BLACK,
        }
    }
}

/// Draws `config.primitive` every frame once the pipeline is built.
///
/// Holds no renderer until the GPU is ready, and none at all if pipeline
/// construction failed; frames are then ignored and the view stays blank.
pub struct HelloApp {
    config: SampleConfig,
    renderer: Option<Renderer>,
}

impl HelloApp {
    pub fn new(config: SampleConfig) -> Self {
        Self {
            config,
            renderer: None,
        }
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }
}

impl App for HelloApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        let renderer = Renderer::new(gpu, self.config.primitive, self.config.clear_color)
            .context("failed to create the render pipeline")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match self.renderer.as_ref() {
            Some(renderer) => renderer.draw(ctx),
            None => AppControl::Continue,
        }
    }
}

/// Opens a window titled `title` and runs `config` until it is closed.
pub fn run_sample(title: &str, config: SampleConfig) -> anyhow::Result<()> {
    let runtime = RuntimeConfig {
        title: title.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };
    Runtime::run(runtime, GpuInit::default(), HelloApp::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_has_no_renderer() {
        let app = HelloApp::new(SampleConfig::new(Primitive::Quad));
        assert!(app.renderer().is_none());
    }

    #[test]
    fn resize_before_gpu_ready_is_ignored() {
        let mut app = HelloApp::new(SampleConfig::default());
        app.on_resize(10, 20);
        assert!(app.renderer().is_none());
    }

    #[test]
    fn default_config_is_triangle_on_black() {
        let cfg = SampleConfig::default();
        assert_eq!(cfg.primitive, Primitive::Triangle);
        assert_eq!(cfg.clear_color, ColorRgba::BLACK);
        assert_eq!(SampleConfig::new(Primitive::Quad).primitive, Primitive::Quad);
    }
}
