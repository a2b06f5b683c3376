#![deny(unsafe_code)]
//! Core of the simple-shape rotating triangle demo.
//!
//! The pure parts (shader source assembly, the vertex table, viewport math,
//! the rotation clock and the per-frame driver) build on every target. The
//! `glow`-backed renderer lives behind the `render` feature.

pub mod clock;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod shader_source;
pub mod viewport;

#[cfg(feature = "render")]
pub mod render;

pub use clock::{rotation_angle, RotationClock};
pub use config::WindowConfig;
pub use error::RenderError;
pub use frame::{FrameHost, Key, Scene};
pub use shader_source::{DesktopGl, ShaderDialect, ShaderSources, TargetDialect, WebGl2};
pub use viewport::Viewport;
