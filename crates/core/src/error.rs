//! Error types for renderer setup.

use thiserror::Error;

/// Errors raised while creating the GPU objects the renderer needs.
///
/// Shader *compile* and *link* failures are not errors: they are logged and
/// rendering carries on with the broken program. Only a driver refusing to
/// hand out an object at all ends up here.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// A shader or program object could not be created.
    #[cfg(feature = "render")]
    #[error(transparent)]
    Shader(#[from] crate::render::ShaderError),

    /// The vertex buffer could not be created.
    #[error("failed to create vertex buffer: {0}")]
    Buffer(String),

    /// The vertex array object could not be created.
    #[error("failed to create vertex array: {0}")]
    VertexArray(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_error_includes_driver_message() {
        let msg = RenderError::Buffer("out of memory".into()).to_string();
        assert!(msg.contains("vertex buffer"), "got: {msg}");
        assert!(msg.contains("out of memory"), "got: {msg}");
    }

    #[test]
    fn vertex_array_error_includes_driver_message() {
        let msg = RenderError::VertexArray("context lost".into()).to_string();
        assert!(msg.contains("vertex array"), "got: {msg}");
        assert!(msg.contains("context lost"), "got: {msg}");
    }

    #[test]
    fn render_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderError>();
    }

    #[test]
    fn render_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RenderError>();
    }
}
