//! GLSL source assembly for the two supported shader dialects.
//!
//! Both targets share the same shader bodies; only the version (and, for
//! GLSL ES, the default precision) header differs. The header is picked by
//! a [`ShaderDialect`] type chosen at compile time, never at runtime.

/// Name of the rotation uniform read by the vertex shader.
pub const ROTATION_UNIFORM: &str = "rotation";

/// Shared vertex shader body.
///
/// Rotates the incoming position in the XY plane by the `rotation` uniform
/// (radians). The angle is never wrapped on the CPU side; `sin`/`cos`
/// take care of that.
pub const VERTEX_SHADER_BODY: &str = r#"
layout (location = 0) in vec3 aPos;
uniform float rotation;
void main() {
    mat2 rotationMatrix = mat2(cos(rotation), -sin(rotation), sin(rotation), cos(rotation));
    vec2 rotatedPos = rotationMatrix * aPos.xy;
    gl_Position = vec4(rotatedPos, aPos.z, 1.0);
}
"#;

/// Shared fragment shader body. Fills every fragment with opaque yellow.
pub const FRAGMENT_SHADER_BODY: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 1.0, 0.0, 1.0);
}
"#;

/// A GLSL dialect: the header prepended to every shader body.
pub trait ShaderDialect {
    /// Short human-readable name, used in logs.
    const NAME: &'static str;

    /// Version directive plus any mandatory preamble, newline-terminated.
    const HEADER: &'static str;
}

/// Desktop OpenGL 3.3 core profile.
#[derive(Debug, Clone, Copy)]
pub struct DesktopGl;

impl DesktopGl {
    /// Context version the windowing layer must request, as (major, minor).
    pub const CONTEXT_VERSION: (u8, u8) = (3, 3);
}

impl ShaderDialect for DesktopGl {
    const NAME: &'static str = "desktop";
    const HEADER: &'static str = "#version 330 core\n";
}

/// WebGL2 / OpenGL ES 3.0.
#[derive(Debug, Clone, Copy)]
pub struct WebGl2;

impl ShaderDialect for WebGl2 {
    const NAME: &'static str = "browser";
    const HEADER: &'static str = "#version 300 es\nprecision mediump float;\n";
}

/// The dialect of the target this crate is being compiled for.
#[cfg(not(target_arch = "wasm32"))]
pub type TargetDialect = DesktopGl;

/// The dialect of the target this crate is being compiled for.
#[cfg(target_arch = "wasm32")]
pub type TargetDialect = WebGl2;

/// A complete vertex + fragment source pair, ready to hand to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Builds the built-in shaders for dialect `D`.
    pub fn for_dialect<D: ShaderDialect>() -> Self {
        Self::from_bodies::<D>(VERTEX_SHADER_BODY, FRAGMENT_SHADER_BODY)
    }

    /// Builds the built-in shaders for the compile target.
    pub fn for_target() -> Self {
        Self::for_dialect::<TargetDialect>()
    }

    /// Prefixes the header of dialect `D` onto arbitrary shader bodies.
    pub fn from_bodies<D: ShaderDialect>(vertex_body: &str, fragment_body: &str) -> Self {
        Self {
            vertex: format!("{}{vertex_body}", D::HEADER),
            fragment: format!("{}{fragment_body}", D::HEADER),
        }
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::for_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_sources_start_with_core_version() {
        let sources = ShaderSources::for_dialect::<DesktopGl>();
        assert!(sources.vertex.starts_with("#version 330 core\n"));
        assert!(sources.fragment.starts_with("#version 330 core\n"));
    }

    #[test]
    fn browser_sources_start_with_es_version_and_precision() {
        let sources = ShaderSources::for_dialect::<WebGl2>();
        let header = "#version 300 es\nprecision mediump float;\n";
        assert!(sources.vertex.starts_with(header), "got:\n{}", sources.vertex);
        assert!(sources.fragment.starts_with(header), "got:\n{}", sources.fragment);
    }

    #[test]
    fn bodies_are_appended_verbatim() {
        for sources in [
            ShaderSources::for_dialect::<DesktopGl>(),
            ShaderSources::for_dialect::<WebGl2>(),
        ] {
            assert!(sources.vertex.ends_with(VERTEX_SHADER_BODY));
            assert!(sources.fragment.ends_with(FRAGMENT_SHADER_BODY));
        }
    }

    #[test]
    fn header_is_exactly_the_prefix() {
        let sources = ShaderSources::for_dialect::<WebGl2>();
        assert_eq!(
            sources.vertex.len(),
            WebGl2::HEADER.len() + VERTEX_SHADER_BODY.len()
        );
    }

    #[test]
    fn vertex_body_declares_rotation_uniform_and_attribute_zero() {
        assert!(VERTEX_SHADER_BODY.contains(&format!("uniform float {ROTATION_UNIFORM};")));
        assert!(VERTEX_SHADER_BODY.contains("layout (location = 0) in vec3 aPos;"));
    }

    #[test]
    fn fragment_body_writes_opaque_yellow() {
        assert!(FRAGMENT_SHADER_BODY.contains("vec4(1.0, 1.0, 0.0, 1.0)"));
    }

    #[test]
    fn custom_bodies_still_receive_header() {
        let sources = ShaderSources::from_bodies::<DesktopGl>("void main() {}", "oops");
        assert_eq!(sources.vertex, "#version 330 core\nvoid main() {}");
        assert_eq!(sources.fragment, "#version 330 core\noops");
    }

    #[test]
    fn target_dialect_matches_host_architecture() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(TargetDialect::NAME, "desktop");
        #[cfg(target_arch = "wasm32")]
        assert_eq!(TargetDialect::NAME, "browser");
        assert_eq!(ShaderSources::default(), ShaderSources::for_target());
    }

    #[test]
    fn desktop_context_version_is_three_three() {
        assert_eq!(DesktopGl::CONTEXT_VERSION, (3, 3));
    }
}
