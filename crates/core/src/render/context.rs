//! The renderer context: everything the frame renderer needs, in one place.
//!
//! `RendererContext` owns the `glow::Context` together with the linked
//! shader program and the triangle mesh. It is built once after the GL
//! context becomes current and then handed by reference to the loop driver.

use super::mesh::TriangleMesh;
use super::shader::{build_program, ShaderProgram};
use crate::error::RenderError;
use crate::frame::Scene;
use crate::shader_source::{ShaderSources, ROTATION_UNIFORM};
use crate::viewport::Viewport;

/// GL context plus the program and geometry drawn every frame.
pub struct RendererContext {
    gl: glow::Context,
    program: ShaderProgram,
    mesh: TriangleMesh,
}

impl RendererContext {
    /// Compiles `sources`, uploads the triangle mesh and wraps them with `gl`.
    ///
    /// Shader compile or link failures do not fail construction; they have
    /// already been logged by the compiler and the program is used as is.
    ///
    /// # Errors
    ///
    /// Returns an error if a shader, program, buffer or vertex array object
    /// cannot be created.
    pub fn new(gl: glow::Context, sources: &ShaderSources) -> Result<Self, RenderError> {
        let program = build_program(&gl, sources)?;
        if !program.is_usable() {
            log::warn!("continuing with a shader program that failed to build; expect no geometry");
        }

        let mesh = TriangleMesh::upload(&gl)?;

        Ok(Self { gl, program, mesh })
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// The program used for every draw.
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// Clears to opaque black and draws the mesh rotated by `rotation` radians.
    ///
    /// The uniform location is looked up on every call. A missing location
    /// is passed through as `None`, which the upload treats as a no-op.
    #[allow(unsafe_code)]
    pub fn render(&self, rotation: f32) {
        use glow::HasContext;

        let gl = &self.gl;
        // SAFETY: glow wraps raw GL calls as unsafe. All handles were created
        // on this context in `new` and are never deleted.
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(self.program.program));

            let location = gl.get_uniform_location(self.program.program, ROTATION_UNIFORM);
            gl.uniform_1_f32(location.as_ref(), rotation);

            gl.bind_vertex_array(Some(self.mesh.vertex_array()));
            gl.draw_arrays(glow::TRIANGLES, 0, self.mesh.vertex_count());
        }
    }

    /// Sets the GL viewport.
    #[allow(unsafe_code)]
    pub fn resize(&self, viewport: Viewport) {
        use glow::HasContext;

        // SAFETY: plain state setter with no handles involved.
        unsafe {
            self.gl
                .viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
    }
}

impl Scene for RendererContext {
    fn draw(&self, rotation: f32) {
        self.render(rotation);
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.resize(viewport);
    }
}
