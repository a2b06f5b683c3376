//! Launch configuration: window config file, CLI overrides and shader overrides.

use std::fs;
use std::path::Path;

use simple_shape_core::shader_source::{FRAGMENT_SHADER_BODY, VERTEX_SHADER_BODY};
use simple_shape_core::{DesktopGl, ShaderSources, WindowConfig};

use crate::error::CliError;

/// Window settings given on the command line. `None` keeps the value from
/// the config file (or the default).
#[derive(Debug, Clone, Default)]
pub struct WindowOverrides {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub no_vsync: bool,
}

/// Reads a JSON window config, or returns the default when `path` is `None`.
pub fn load_window_config(path: Option<&Path>) -> Result<WindowConfig, CliError> {
    let Some(path) = path else {
        return Ok(WindowConfig::default());
    };

    let text = read_file(path, "config")?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))
}

/// Applies command-line overrides on top of `config`.
pub fn apply_overrides(mut config: WindowConfig, overrides: &WindowOverrides) -> WindowConfig {
    if let Some(title) = &overrides.title {
        config.title = title.clone();
    }
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if overrides.no_vsync {
        config.vsync = false;
    }
    config
}

/// Builds the desktop shader sources, substituting bodies read from the
/// given files. The version header is prefixed either way.
pub fn load_shader_sources(
    vertex: Option<&Path>,
    fragment: Option<&Path>,
) -> Result<ShaderSources, CliError> {
    let vertex_body = match vertex {
        Some(path) => read_file(path, "vertex shader")?,
        None => VERTEX_SHADER_BODY.to_string(),
    };
    let fragment_body = match fragment {
        Some(path) => read_file(path, "fragment shader")?,
        None => FRAGMENT_SHADER_BODY.to_string(),
    };

    Ok(ShaderSources::from_bodies::<DesktopGl>(
        &vertex_body,
        &fragment_body,
    ))
}

fn read_file(path: &Path, what: &str) -> Result<String, CliError> {
    fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("failed to read {what} {}: {e}", path.display())))
}
