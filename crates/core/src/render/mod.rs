//! OpenGL / WebGL2 rendering through `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//!
//! # Module overview
//!
//! - [`shader`] -- Shader compilation, linking, and failure diagnostics.
//! - [`mesh`] -- Upload of the fixed triangle geometry into a VAO.
//! - [`context`] -- The renderer context driven by the frame loop.

pub mod context;
pub mod mesh;
pub mod shader;

pub use context::RendererContext;
pub use mesh::TriangleMesh;
pub use shader::{
    build_program, compile_shader, format_shader_error, link_program, CompiledShader,
    ShaderError, ShaderProgram, ShaderStage,
};
