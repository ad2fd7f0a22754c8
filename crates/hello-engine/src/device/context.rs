use anyhow::{Context, Result};
use winit::window::Window;

use crate::geometry::ViewportSize;

use super::surface;
use super::{Drawable, GpuFrame, GpuInit, SurfaceErrorAction};

/// Device, queue and surface for one window.
///
/// The surface borrows the window for `'w`; the window must outlive this value.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,

    device: wgpu::Device,

    /// Command queue. Submission is fire-and-forget.
    queue: wgpu::Queue,

    /// Active surface configuration. Its format is the pipeline's output format.
    config: wgpu::SurfaceConfiguration,

    /// Latest drawable size in physical pixels; may be zero while minimized.
    size: ViewportSize,
}

impl<'w> Gpu<'w> {
    /// Acquires an adapter, device and queue compatible with `window`, and
    /// configures its surface.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = ViewportSize::from(window.inner_size());
        anyhow::ensure!(!size.is_empty(), "window has zero size");

        let GpuInit {
            prefer_srgb,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter `{}` ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("hello device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, prefer_srgb)
            .context("surface reports no supported formats")?;
        let alpha_mode = surface::choose_alpha_mode(&caps, alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);
        log::info!(
            "surface configured: {format:?} {}x{} {present_mode:?}",
            size.width,
            size.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Output pixel format of the drawable.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Records the new drawable size and reconfigures the surface.
    ///
    /// A surface cannot be configured at 0x0; in that case only the recorded
    /// size changes and frames go without a drawable until the next resize.
    pub fn resize(&mut self, new_size: ViewportSize) {
        self.size = new_size;
        if new_size.is_empty() {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Opens a command encoder and tries to acquire the next drawable.
    ///
    /// Acquisition failures are resolved here (reconfiguring if needed) and
    /// reported through [`GpuFrame::surface_error`]; the frame is still usable
    /// for submission.
    pub fn begin_frame(&mut self) -> GpuFrame {
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hello frame encoder"),
            });

        if self.size.is_empty() {
            return GpuFrame {
                encoder,
                drawable: None,
                surface_error: None,
            };
        }

        match self.surface.get_current_texture() {
            Ok(surface_texture) => {
                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                GpuFrame {
                    encoder,
                    drawable: Some(Drawable {
                        surface_texture,
                        view,
                    }),
                    surface_error: None,
                }
            }
            Err(err) => {
                let action = self.handle_surface_error(&err);
                log::debug!("no drawable this frame: {err} ({action:?})");
                GpuFrame {
                    encoder,
                    drawable: None,
                    surface_error: Some(action),
                }
            }
        }
    }

    /// Submits the recorded commands and presents the drawable, if any.
    ///
    /// Does not wait for the GPU.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame {
            encoder, drawable, ..
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));

        if let Some(Drawable {
            surface_texture,
            view,
        }) = drawable
        {
            drop(view);
            surface_texture.present();
        }
    }

    fn handle_surface_error(&mut self, err: &wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = surface::surface_error_action(err);
        if action == SurfaceErrorAction::Reconfigured && !self.size.is_empty() {
            self.surface.configure(&self.device, &self.config);
        }
        action
    }
}
