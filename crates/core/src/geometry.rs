//! The fixed triangle geometry.
//!
//! Three independent triangles arranged as the top, bottom-left and
//! bottom-right quadrants of a larger triangle silhouette. Vertices are
//! position only and are not deduplicated; there is no index buffer.

/// Number of `f32` components per vertex (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Distance in bytes between consecutive vertices.
pub const VERTEX_STRIDE: usize = COMPONENTS_PER_VERTEX * std::mem::size_of::<f32>();

/// Shader attribute location of the position.
pub const POSITION_LOCATION: u32 = 0;

/// Number of vertices submitted per draw call.
pub const VERTEX_COUNT: usize = 9;

/// Vertex positions, three per triangle.
pub static TRIANGLE_VERTICES: [[f32; 3]; VERTEX_COUNT] = [
    // top
    [0.0, 0.575, 0.0],
    [-0.25, 0.145, 0.0],
    [0.25, 0.145, 0.0],
    // bottom left
    [-0.25, 0.145, 0.0],
    [-0.5, -0.285, 0.0],
    [0.0, -0.285, 0.0],
    // bottom right
    [0.25, 0.145, 0.0],
    [0.0, -0.285, 0.0],
    [0.5, -0.285, 0.0],
];

/// The vertex table as a flat run of floats.
pub fn vertex_floats() -> &'static [f32] {
    bytemuck::cast_slice(&TRIANGLE_VERTICES[..])
}

/// The vertex table as raw bytes, in the layout uploaded to the GPU.
pub fn vertex_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&TRIANGLE_VERTICES[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_vertices_of_three_floats() {
        assert_eq!(VERTEX_COUNT, 9);
        assert_eq!(vertex_floats().len(), 27);
    }

    #[test]
    fn byte_size_is_nine_by_three_by_four() {
        assert_eq!(vertex_bytes().len(), 9 * 3 * 4);
        assert_eq!(VERTEX_STRIDE, 12);
    }

    #[test]
    fn flat_floats_follow_table_order() {
        let expected: [f32; 27] = [
            0.0, 0.575, 0.0, -0.25, 0.145, 0.0, 0.25, 0.145, 0.0, //
            -0.25, 0.145, 0.0, -0.5, -0.285, 0.0, 0.0, -0.285, 0.0, //
            0.25, 0.145, 0.0, 0.0, -0.285, 0.0, 0.5, -0.285, 0.0,
        ];
        assert_eq!(vertex_floats(), &expected[..]);
    }

    #[test]
    fn bytes_are_native_endian_floats() {
        let bytes = vertex_bytes();
        let second_y = f32::from_ne_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        assert_eq!(second_y, 0.145);
    }

    #[test]
    fn all_vertices_lie_in_the_z_zero_plane() {
        assert!(TRIANGLE_VERTICES.iter().all(|v| v[2] == 0.0));
    }

    #[test]
    fn geometry_fits_clip_space_at_any_rotation() {
        // Rotation preserves length, so every vertex must sit inside the unit circle.
        for v in &TRIANGLE_VERTICES {
            let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!(r < 1.0, "vertex {v:?} would leave clip space when rotated");
        }
    }
}
