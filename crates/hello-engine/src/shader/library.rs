use std::borrow::Cow;
use std::marker::PhantomData;

use super::slots::{CONSTANTS_GROUP, VIEWPORT_SIZE_SLOT};
use super::ShaderError;

const HELLO_WGSL: &str = include_str!("hello.wgsl");

/// Pipeline stage marker for [`EntryPoint`].
pub trait Stage {
    const STAGE: naga::ShaderStage;
    const NAME: &'static str;
}

#[derive(Debug, Copy, Clone)]
pub struct VertexStage;

#[derive(Debug, Copy, Clone)]
pub struct FragmentStage;

impl Stage for VertexStage {
    const STAGE: naga::ShaderStage = naga::ShaderStage::Vertex;
    const NAME: &'static str = "vertex";
}

impl Stage for FragmentStage {
    const STAGE: naga::ShaderStage = naga::ShaderStage::Fragment;
    const NAME: &'static str = "fragment";
}

/// An entry point known to exist in a [`ShaderLibrary`] with stage `S`.
///
/// Only [`ShaderLibrary::entry_point`] constructs these.
#[derive(Debug, Clone)]
pub struct EntryPoint<S: Stage> {
    name: String,
    _stage: PhantomData<S>,
}

impl<S: Stage> EntryPoint<S> {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A parsed and validated WGSL module.
#[derive(Debug)]
pub struct ShaderLibrary {
    label: String,
    source: Cow<'static, str>,
    module: naga::Module,
}

impl ShaderLibrary {
    /// Loads the library bundled with the samples.
    pub fn hello() -> Result<Self, ShaderError> {
        Self::from_wgsl("hello", HELLO_WGSL)
    }

    /// Parses and validates `source`, and checks that the viewport uniform sits at
    /// its agreed binding.
    pub fn from_wgsl(
        label: impl Into<String>,
        source: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ShaderError> {
        let label = label.into();
        let source = source.into();

        let module = naga::front::wgsl::parse_str(&source).map_err(|e| ShaderError::Parse {
            label: label.clone(),
            message: e.emit_to_string(&source),
        })?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            label: label.clone(),
            message: error_chain(&e),
        })?;

        let expected = naga::ResourceBinding {
            group: CONSTANTS_GROUP,
            binding: VIEWPORT_SIZE_SLOT,
        };
        let has_viewport = module.global_variables.iter().any(|(_, var)| {
            var.space == naga::AddressSpace::Uniform && var.binding.as_ref() == Some(&expected)
        });
        if !has_viewport {
            return Err(ShaderError::MissingViewportBinding {
                label,
                group: CONSTANTS_GROUP,
                binding: VIEWPORT_SIZE_SLOT,
            });
        }

        log::debug!(
            "shader library `{label}` loaded ({} entry points)",
            module.entry_points.len()
        );

        Ok(Self {
            label,
            source,
            module,
        })
    }

    /// Resolves `name` to an entry point of stage `S`.
    pub fn entry_point<S: Stage>(&self, name: &str) -> Result<EntryPoint<S>, ShaderError> {
        let Some(ep) = self.module.entry_points.iter().find(|ep| ep.name == name) else {
            return Err(ShaderError::MissingEntryPoint {
                label: self.label.clone(),
                name: name.to_string(),
            });
        };

        if ep.stage != S::STAGE {
            return Err(ShaderError::StageMismatch {
                name: name.to_string(),
                expected: S::NAME,
                found: stage_name(ep.stage),
            });
        }

        Ok(EntryPoint {
            name: ep.name.clone(),
            _stage: PhantomData,
        })
    }

    /// Hands the WGSL source to the device.
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.clone()),
        })
    }
}

fn stage_name(stage: naga::ShaderStage) -> &'static str {
    match stage {
        naga::ShaderStage::Vertex => VertexStage::NAME,
        naga::ShaderStage::Fragment => FragmentStage::NAME,
        naga::ShaderStage::Compute => "compute",
        _ => "mesh-pipeline",
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::slots::{FRAGMENT_ENTRY, VERTEX_ENTRY};

    const NO_VIEWPORT: &str = r#"
        @group(0) @binding(0) var<uniform> size: vec4<u32>;

        @vertex
        fn vertexShader(@location(0) p: vec2<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(p, 0.0, 1.0);
        }
    "#;

    #[test]
    fn bundled_library_resolves_both_entry_points() {
        let lib = ShaderLibrary::hello().unwrap();
        let vs = lib.entry_point::<VertexStage>(VERTEX_ENTRY).unwrap();
        let fs = lib.entry_point::<FragmentStage>(FRAGMENT_ENTRY).unwrap();
        assert_eq!(vs.name(), "vertexShader");
        assert_eq!(fs.name(), "fragmentShader");
    }

    #[test]
    fn unknown_name_is_rejected() {
        let lib = ShaderLibrary::hello().unwrap();
        let err = lib.entry_point::<VertexStage>("vertexShaderX").unwrap_err();
        assert!(
            matches!(err, ShaderError::MissingEntryPoint { ref name, .. } if name == "vertexShaderX")
        );
    }

    #[test]
    fn wrong_stage_is_rejected() {
        let lib = ShaderLibrary::hello().unwrap();
        let err = lib.entry_point::<VertexStage>(FRAGMENT_ENTRY).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::StageMismatch {
                expected: "vertex",
                found: "fragment",
                ..
            }
        ));
    }

    #[test]
    fn parse_error_carries_label() {
        let err = ShaderLibrary::from_wgsl("broken", "fn (").unwrap_err();
        assert!(matches!(err, ShaderError::Parse { ref label, .. } if label == "broken"));
    }

    #[test]
    fn viewport_must_be_at_its_slot() {
        let err = ShaderLibrary::from_wgsl("no-viewport", NO_VIEWPORT).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::MissingViewportBinding {
                group: 0,
                binding: 1,
                ..
            }
        ));
    }
}
