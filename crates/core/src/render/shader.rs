//! Shader compilation and program linking for OpenGL / WebGL2.
//!
//! Compile and link failures are reported through `log::error!` and do not
//! stop the caller: the (broken) handles are returned and used as is. The
//! only hard errors are the driver refusing to create a shader or program
//! object, since there is then no handle to carry on with.

use std::fmt;

use thiserror::Error;

use crate::shader_source::ShaderSources;

/// Prefix of the diagnostic logged when a shader stage fails to compile.
pub const COMPILE_FAILED_TAG: &str = "ERROR::SHADER::COMPILATION_FAILED";

/// Prefix of the diagnostic logged when a program fails to link.
pub const LINK_FAILED_TAG: &str = "ERROR::SHADER::PROGRAM::LINKING_FAILED";

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Errors that prevent a shader or program object from existing at all.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// The driver returned no shader object.
    #[error("failed to create {stage} shader: {log}")]
    CreateShader {
        /// The stage that was requested.
        stage: ShaderStage,
        /// The driver's message.
        log: String,
    },
    /// The driver returned no program object.
    #[error("failed to create shader program: {0}")]
    CreateProgram(String),
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`. Driver messages reference line
/// numbers, and the version header shifts them by one or two lines, so
/// the numbering saves some head-scratching.
///
/// Both `source` and `log` may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let source_lines: Vec<&str> = source.lines().collect();

    let width = source_lines.len().max(1).to_string().len();

    let numbered: String = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Diagnostic text for a failed compile of `stage`.
pub fn compile_failure_message(stage: ShaderStage, source: &str, info_log: &str) -> String {
    format!(
        "{COMPILE_FAILED_TAG} ({stage})\n{}",
        format_shader_error(source, info_log)
    )
}

/// Diagnostic text for a failed program link.
pub fn link_failure_message(info_log: &str) -> String {
    format!("{LINK_FAILED_TAG}\n{info_log}")
}

/// A shader object together with the outcome of compiling it.
#[derive(Debug, Clone, Copy)]
pub struct CompiledShader {
    pub shader: glow::Shader,
    pub stage: ShaderStage,
    pub compiled: bool,
}

/// A program object together with whether everything that went into it
/// compiled and linked.
#[derive(Debug, Clone, Copy)]
pub struct ShaderProgram {
    pub program: glow::Program,
    pub linked: bool,
    pub stages_compiled: bool,
}

impl ShaderProgram {
    /// Whether the program can be expected to render anything.
    pub fn is_usable(&self) -> bool {
        self.linked && self.stages_compiled
    }
}

/// Compiles a single shader stage.
///
/// A compile failure is logged with the driver's info log and the
/// numbered source; the handle is returned anyway with `compiled: false`.
///
/// # Errors
///
/// Returns `ShaderError::CreateShader` if the driver hands out no shader object.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledShader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. `stage.gl_type()` is a valid
    // shader type and the source is a valid string.
    let shader = unsafe {
        gl.create_shader(stage.gl_type())
            .map_err(|log| ShaderError::CreateShader { stage, log })?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if !compiled {
        let info_log = unsafe { gl.get_shader_info_log(shader) };
        log::error!("{}", compile_failure_message(stage, source, &info_log));
    }

    Ok(CompiledShader {
        shader,
        stage,
        compiled,
    })
}

/// Links a vertex and fragment shader into a program.
///
/// Both shader objects are deleted once linked, whatever the outcome. A
/// link failure is logged and the program is returned with `linked: false`.
///
/// # Errors
///
/// Returns `ShaderError::CreateProgram` if the driver hands out no program object.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: CompiledShader,
    fragment: CompiledShader,
) -> Result<ShaderProgram, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. Shader handles come from
    // compile_shader and are deleted exactly once on every path.
    let program = match unsafe { gl.create_program() } {
        Ok(p) => p,
        Err(e) => {
            unsafe {
                gl.delete_shader(vertex.shader);
                gl.delete_shader(fragment.shader);
            }
            return Err(ShaderError::CreateProgram(e));
        }
    };

    let linked = unsafe {
        gl.attach_shader(program, vertex.shader);
        gl.attach_shader(program, fragment.shader);
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);

        // The program keeps what it needs; the shader objects are done.
        gl.delete_shader(vertex.shader);
        gl.delete_shader(fragment.shader);
        linked
    };

    if !linked {
        let info_log = unsafe { gl.get_program_info_log(program) };
        log::error!("{}", link_failure_message(&info_log));
    }

    Ok(ShaderProgram {
        program,
        linked,
        stages_compiled: vertex.compiled && fragment.compiled,
    })
}

/// Compiles both stages of `sources` and links them.
///
/// # Errors
///
/// Returns a `ShaderError` only when a GL object cannot be created; see
/// [`compile_shader`] and [`link_program`].
#[allow(unsafe_code)]
pub fn build_program(
    gl: &glow::Context,
    sources: &ShaderSources,
) -> Result<ShaderProgram, ShaderError> {
    use glow::HasContext;

    let vertex = compile_shader(gl, ShaderStage::Vertex, &sources.vertex)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, &sources.fragment) {
        Ok(f) => f,
        Err(e) => {
            // SAFETY: vertex.shader was created by compile_shader above.
            unsafe { gl.delete_shader(vertex.shader) };
            return Err(e);
        }
    };

    link_program(gl, vertex, fragment)
}
