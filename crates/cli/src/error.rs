//! Structured launcher errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success (window closed normally)
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: windowing system could not be initialized
//! - 11: window, GL context or surface could not be created
//! - 12: GL functions could not be loaded
//! - 13: GL objects for the scene could not be created
//! - 14: I/O error (config or shader file)
//! - 15: config parse / serialization error

use simple_shape_core::RenderError;
use std::fmt;

/// Errors produced by the launcher, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The event loop could not be created.
    Windowing(String),
    /// The window, GL context or window surface could not be created.
    Window(String),
    /// GL entry points could not be resolved.
    GlLoad(String),
    /// Scene setup failed on the GPU side.
    Render(RenderError),
    /// A file could not be read.
    Io(String),
    /// A config file could not be parsed, or output could not be serialized.
    Config(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Windowing(_) => 10,
            CliError::Window(_) => 11,
            CliError::GlLoad(_) => 12,
            CliError::Render(_) => 13,
            CliError::Io(_) => 14,
            CliError::Config(_) => 15,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Windowing(msg) => write!(f, "failed to initialize windowing system: {msg}"),
            CliError::Window(msg) => write!(f, "failed to create window: {msg}"),
            CliError::GlLoad(msg) => write!(f, "failed to load OpenGL functions: {msg}"),
            CliError::Render(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Config(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowing_error_exit_code_is_10() {
        assert_eq!(CliError::Windowing("no display".into()).exit_code(), 10);
    }

    #[test]
    fn window_error_exit_code_is_11() {
        assert_eq!(CliError::Window("no config".into()).exit_code(), 11);
    }

    #[test]
    fn gl_load_error_exit_code_is_12() {
        assert_eq!(CliError::GlLoad("glCreateShader".into()).exit_code(), 12);
    }

    #[test]
    fn render_error_exit_code_is_13() {
        let err = CliError::from(RenderError::Buffer("oom".into()));
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().contains("oom"));
    }

    #[test]
    fn io_error_exit_code_is_14() {
        assert_eq!(CliError::Io("missing".into()).exit_code(), 14);
    }

    #[test]
    fn from_serde_json_error_routes_to_config() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 15);
    }

    #[test]
    fn fatal_startup_errors_say_what_failed() {
        assert!(CliError::Windowing("x".into())
            .to_string()
            .contains("windowing system"));
        assert!(CliError::Window("x".into()).to_string().contains("create window"));
        assert!(CliError::GlLoad("x".into()).to_string().contains("OpenGL functions"));
    }
}
