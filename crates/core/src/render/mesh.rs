//! GPU upload of the fixed triangle geometry.

use crate::error::RenderError;
use crate::geometry::{
    vertex_bytes, COMPONENTS_PER_VERTEX, POSITION_LOCATION, VERTEX_COUNT, VERTEX_STRIDE,
};

/// Vertex array object wrapping the static position buffer.
///
/// Created once and kept for the lifetime of the context; nothing deletes
/// it explicitly. The buffer stays referenced by the vertex array's
/// attribute binding.
#[derive(Debug, Clone, Copy)]
pub struct TriangleMesh {
    vao: glow::VertexArray,
}

impl TriangleMesh {
    /// Uploads the vertex table as `STATIC_DRAW` data and describes it to
    /// attribute 0 (three floats, tightly packed).
    ///
    /// Leaves neither the buffer nor the vertex array bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver hands out no buffer or vertex array.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context) -> Result<Self, RenderError> {
        use glow::HasContext;

        // SAFETY: glow wraps raw GL calls as unsafe. Handles are fresh from the
        // driver and the attribute layout matches the uploaded bytes.
        let vao = unsafe { gl.create_vertex_array().map_err(RenderError::VertexArray)? };
        let vbo = match unsafe { gl.create_buffer() } {
            Ok(b) => b,
            Err(e) => {
                unsafe { gl.delete_vertex_array(vao) };
                return Err(RenderError::Buffer(e));
            }
        };

        unsafe {
            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, vertex_bytes(), glow::STATIC_DRAW);

            gl.vertex_attrib_pointer_f32(
                POSITION_LOCATION,
                COMPONENTS_PER_VERTEX as i32,
                glow::FLOAT,
                false,
                VERTEX_STRIDE as i32,
                0,
            );
            gl.enable_vertex_attrib_array(POSITION_LOCATION);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        log::debug!(
            "uploaded {} vertices ({} bytes)",
            VERTEX_COUNT,
            vertex_bytes().len()
        );

        Ok(Self { vao })
    }

    /// The vertex array to bind before drawing.
    pub fn vertex_array(&self) -> glow::VertexArray {
        self.vao
    }

    /// Vertices per draw call.
    pub fn vertex_count(&self) -> i32 {
        VERTEX_COUNT as i32
    }
}
