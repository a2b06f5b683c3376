//! Window parameters shared by the desktop and browser front ends.

use serde::{Deserialize, Serialize};

/// Default window title.
pub const DEFAULT_TITLE: &str = "OpenGL Rotating Triangle";

/// Default window width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default window height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Window configuration.
///
/// Missing fields deserialize to their defaults, so a config file only needs
/// to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Ask the presentation layer to wait for vertical blank.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_window() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.title, "OpenGL Rotating Triangle");
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert!(cfg.vsync);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: WindowConfig = serde_json::from_str(r#"{"width": 1024}"#).unwrap();
        assert_eq!(cfg.width, 1024);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.title, DEFAULT_TITLE);
    }

    #[test]
    fn empty_json_object_is_default() {
        let cfg: WindowConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, WindowConfig::default());
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(WindowConfig::default()).unwrap();
        assert_eq!(json["title"], DEFAULT_TITLE);
        assert_eq!(json["width"], 800);
        assert_eq!(json["height"], 600);
        assert_eq!(json["vsync"], true);
    }
}
