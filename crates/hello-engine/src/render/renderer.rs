use crate::core::{AppControl, FrameCtx};
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::geometry::{ColorRgba, Primitive, Vertex, ViewportSize};
use crate::shader::ShaderLibrary;

use super::pipeline::{viewport_layout_entry, HelloPipeline, ShaderPair, ViewportUniform};
use super::plan::{DrawCall, FrameSink, FrameState};
use super::PipelineError;

/// Owns the pipeline and per-view state and draws one primitive per frame.
pub struct Renderer {
    state: FrameState,
    clear: ColorRgba,

    pipeline: HelloPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    vertex_vbo: wgpu::Buffer,
}

impl Renderer {
    /// Loads the bundled shaders and builds the pipeline for `gpu`'s surface format.
    ///
    /// Fails without creating any GPU object if the shaders do not resolve.
    pub fn new(
        gpu: &Gpu<'_>,
        primitive: Primitive,
        clear: ColorRgba,
    ) -> Result<Self, PipelineError> {
        let library = ShaderLibrary::hello()?;
        let shaders = ShaderPair::hello(&library)?;

        let device = gpu.device();
        let pipeline = HelloPipeline::build(device, gpu.surface_format(), &shaders);

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hello viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hello viewport bind group"),
            layout: pipeline.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: viewport_layout_entry().binding,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        // Sized once for the primitive; contents are rewritten every frame.
        let vertex_vbo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hello vertex vbo"),
            size: std::mem::size_of_val(primitive.vertices()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::info!("renderer ready: drawing a {}", primitive.name());

        Ok(Self {
            state: FrameState::new(primitive, gpu.size()),
            clear,
            pipeline,
            bind_group,
            viewport_ubo,
            vertex_vbo,
        })
    }

    /// Stores the new drawable size for subsequent frames.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
    }

    /// Draws one frame and submits it.
    ///
    /// The command buffer is submitted even when nothing is encoded.
    pub fn draw(&self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let frame = ctx.begin_frame();
        let sink = GpuSink {
            renderer: self,
            ctx,
            frame,
        };
        self.state.drive(sink)
    }

    fn encode(&self, queue: &wgpu::Queue, frame: &mut GpuFrame, call: &DrawCall) {
        let GpuFrame {
            encoder,
            drawable: Some(drawable),
            ..
        } = frame
        else {
            return;
        };

        upload_vertices(queue, &self.vertex_vbo, call.vertices);
        queue.write_buffer(
            &self.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform::from(call.viewport)),
        );

        // The shader sees the stored size; the rasterizer viewport must fit the target.
        let (tw, th) = drawable.size();
        let raster = call.viewport.min(ViewportSize::new(tw, th));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hello pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &drawable.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(0.0, 0.0, raster.width as f32, raster.height as f32, 0.0, 1.0);
        rpass.set_pipeline(self.pipeline.raw());
        rpass.set_vertex_buffer(call.vertex_slot, self.vertex_vbo.slice(..));
        rpass.set_bind_group(call.constants_group, &self.bind_group, &[]);
        rpass.draw(0..call.vertex_count(), 0..1);
    }
}

/// A [`GpuFrame`] being recorded by a [`Renderer`].
struct GpuSink<'r, 'a, 'w> {
    renderer: &'r Renderer,
    ctx: &'r mut FrameCtx<'a, 'w>,
    frame: GpuFrame,
}

impl FrameSink for GpuSink<'_, '_, '_> {
    fn has_drawable(&self) -> bool {
        self.frame.has_drawable()
    }

    fn surface_error(&self) -> Option<SurfaceErrorAction> {
        self.frame.surface_error
    }

    fn encode(&mut self, call: &DrawCall) {
        self.renderer.encode(self.ctx.gpu.queue(), &mut self.frame, call);
    }

    fn discard_drawable(&mut self) {
        self.frame.discard_drawable();
    }

    fn submit(self) {
        self.ctx.submit(self.frame);
    }
}

fn upload_vertices(queue: &wgpu::Queue, vbo: &wgpu::Buffer, vertices: &[Vertex]) {
    queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
}
