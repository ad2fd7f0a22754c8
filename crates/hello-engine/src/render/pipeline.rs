use bytemuck::{Pod, Zeroable};

use crate::geometry::{Vertex, ViewportSize};
use crate::shader::slots::{FRAGMENT_ENTRY, VERTEX_BUFFER_SLOT, VERTEX_ENTRY, VIEWPORT_SIZE_SLOT};
use crate::shader::{EntryPoint, FragmentStage, ShaderError, ShaderLibrary, VertexStage};

/// Viewport size as seen by the vertex shader (`ViewportUniform` in `hello.wgsl`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct ViewportUniform {
    pub size: [u32; 2],
    pub _pad: [u32; 2], // 16-byte alignment
}

impl From<ViewportSize> for ViewportUniform {
    fn from(v: ViewportSize) -> Self {
        Self {
            size: v.to_array(),
            _pad: [0; 2],
        }
    }
}

/// Layout of the viewport uniform; the bind group entry takes its binding from here.
pub(crate) fn viewport_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: VIEWPORT_SIZE_SLOT,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<ViewportUniform>() as u64),
        },
        count: None,
    }
}

// `buffers` below is indexed by slot and holds only the vertex buffer.
const _: () = assert!(VERTEX_BUFFER_SLOT == 0);

/// Vertex + fragment entry points resolved from one library.
pub struct ShaderPair<'l> {
    library: &'l ShaderLibrary,
    vertex: EntryPoint<VertexStage>,
    fragment: EntryPoint<FragmentStage>,
}

impl<'l> ShaderPair<'l> {
    /// Resolves both entry points; either name failing aborts pipeline construction.
    pub fn resolve(
        library: &'l ShaderLibrary,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self, ShaderError> {
        Ok(Self {
            library,
            vertex: library.entry_point(vertex)?,
            fragment: library.entry_point(fragment)?,
        })
    }

    /// The pair the samples use.
    pub fn hello(library: &'l ShaderLibrary) -> Result<Self, ShaderError> {
        Self::resolve(library, VERTEX_ENTRY, FRAGMENT_ENTRY)
    }

    pub fn vertex(&self) -> &EntryPoint<VertexStage> {
        &self.vertex
    }

    pub fn fragment(&self) -> &EntryPoint<FragmentStage> {
        &self.fragment
    }
}

/// The single compiled pipeline a view draws with.
pub struct HelloPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl HelloPipeline {
    /// Compiles `shaders` against the output pixel `format`.
    pub fn build(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        shaders: &ShaderPair<'_>,
    ) -> Self {
        let module = shaders.library.create_module(device);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("hello viewport bgl"),
            entries: &[viewport_layout_entry()],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("hello pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("hello pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(shaders.vertex.name()),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(shaders.fragment.name()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "pipeline built: {} + {} -> {format:?}",
            shaders.vertex.name(),
            shaders.fragment.name()
        );

        Self {
            pipeline,
            bind_group_layout,
        }
    }

    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_pair_resolves() {
        let lib = ShaderLibrary::hello().unwrap();
        let pair = ShaderPair::hello(&lib).unwrap();
        assert_eq!(pair.vertex().name(), VERTEX_ENTRY);
        assert_eq!(pair.fragment().name(), FRAGMENT_ENTRY);
    }

    #[test]
    fn unresolvable_fragment_fails_the_pair() {
        let lib = ShaderLibrary::hello().unwrap();
        let err = ShaderPair::resolve(&lib, VERTEX_ENTRY, "fragmentShade").err().unwrap();
        assert!(matches!(err, ShaderError::MissingEntryPoint { .. }));
    }

    #[test]
    fn swapped_names_fail_the_pair() {
        let lib = ShaderLibrary::hello().unwrap();
        let err = ShaderPair::resolve(&lib, FRAGMENT_ENTRY, VERTEX_ENTRY).err().unwrap();
        assert!(matches!(err, ShaderError::StageMismatch { .. }));
    }

    #[test]
    fn viewport_uniform_binds_at_its_slot() {
        let entry = viewport_layout_entry();
        assert_eq!(entry.binding, VIEWPORT_SIZE_SLOT);
        assert_eq!(entry.binding, 1);
        assert_eq!(entry.visibility, wgpu::ShaderStages::VERTEX);
        assert!(matches!(
            entry.ty,
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                min_binding_size: Some(size),
                ..
            } if size.get() == 16
        ));
    }

    #[test]
    fn viewport_uniform_is_sixteen_bytes() {
        let u = ViewportUniform::from(ViewportSize::new(3, 4));
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
        assert_eq!(bytemuck::cast::<_, [u32; 4]>(u), [3, 4, 0, 0]);
    }
}
