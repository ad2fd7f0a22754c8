use thiserror::Error;

/// Errors raised while loading a shader library or resolving its entry points.
///
/// Every variant is reported before any GPU object is created.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to parse shader library `{label}`:\n{message}")]
    Parse { label: String, message: String },

    #[error("shader library `{label}` failed validation:\n{message}")]
    Validation { label: String, message: String },

    #[error("no entry point named `{name}` in shader library `{label}`")]
    MissingEntryPoint { label: String, name: String },

    #[error("entry point `{name}` is a {found} shader, expected a {expected} shader")]
    StageMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error(
        "shader library `{label}` does not declare a uniform at @group({group}) @binding({binding})"
    )]
    MissingViewportBinding {
        label: String,
        group: u32,
        binding: u32,
    },
}
