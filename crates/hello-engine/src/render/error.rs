use thiserror::Error;

use crate::shader::ShaderError;

/// Why a [`Renderer`](super::Renderer) could not be built.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShaderPair;
    use crate::shader::ShaderLibrary;

    fn resolve(vertex: &str) -> Result<(), PipelineError> {
        let library = ShaderLibrary::hello()?;
        ShaderPair::resolve(&library, vertex, "fragmentShader")?;
        Ok(())
    }

    #[test]
    fn shader_errors_pass_through_unchanged() {
        let err = resolve("missing").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Shader(ShaderError::MissingEntryPoint { ref name, .. }) if name == "missing"
        ));
        assert_eq!(
            err.to_string(),
            "no entry point named `missing` in shader library `hello`"
        );
    }

    #[test]
    fn resolvable_pair_is_ok() {
        assert!(resolve("vertexShader").is_ok());
    }
}
