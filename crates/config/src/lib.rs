//! Shared configuration for the showcase viewer
//!
//! This crate provides the single source of truth for window dimensions,
//! viewer defaults, and other configuration shared across all build modes
//! (native Bevy, browser/WASM).

use serde::{Deserialize, Serialize};
use showcase_ipc::ViewMode;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1600;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 900;

/// Default scale factor (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default length of one FPS sampling window in milliseconds
pub const DEFAULT_FPS_WINDOW_MS: f64 = 1000.0;

/// Canvas element the browser build renders into
pub const DEFAULT_CANVAS_SELECTOR: &str = "#showcase-canvas";

/// Errors from reading configuration overrides
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    ViewMode {
        var: &'static str,
        source: showcase_ipc::IpcError,
    },

    #[error("{var}: expected a boolean, got {value:?}")]
    Bool { var: &'static str, value: String },

    #[error("{var}: expected a positive number of milliseconds, got {value:?}")]
    Millis { var: &'static str, value: String },
}

/// Display configuration for window and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Scale factor for DPI scaling
    pub scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl DisplayConfig {
    /// Get scaled width (for physical pixel calculations)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale) as u32
    }

    /// Get scaled height (for physical pixel calculations)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale) as u32
    }
}

/// Viewer session defaults and presentation strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct ViewerConfig {
    pub title: String,
    pub description: String,
    /// CSS selector of the canvas used by the browser build
    pub canvas_selector: String,
    pub initial_view_mode: ViewMode,
    pub auto_rotate: bool,
    /// Length of one FPS sampling window
    pub fps_window_ms: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "3D Product Showcase".to_string(),
            description: "Interactive 3D product viewer with advanced controls".to_string(),
            canvas_selector: DEFAULT_CANVAS_SELECTOR.to_string(),
            initial_view_mode: ViewMode::Solid,
            auto_rotate: true,
            fps_window_ms: DEFAULT_FPS_WINDOW_MS,
        }
    }
}

impl ViewerConfig {
    /// Defaults with `SHOWCASE_*` environment overrides applied.
    ///
    /// Invalid overrides are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let overrides = [
            ("SHOWCASE_VIEW_MODE", std::env::var("SHOWCASE_VIEW_MODE").ok()),
            ("SHOWCASE_AUTO_ROTATE", std::env::var("SHOWCASE_AUTO_ROTATE").ok()),
            ("SHOWCASE_FPS_WINDOW_MS", std::env::var("SHOWCASE_FPS_WINDOW_MS").ok()),
        ];
        for (var, value) in overrides {
            if let Some(value) = value {
                if let Err(e) = config.apply_override(var, &value) {
                    tracing::warn!("Ignoring invalid override: {}", e);
                }
            }
        }
        config
    }

    /// Apply a single `SHOWCASE_*` override by variable name
    pub fn apply_override(&mut self, var: &'static str, value: &str) -> Result<(), ConfigError> {
        match var {
            "SHOWCASE_VIEW_MODE" => {
                self.initial_view_mode = value
                    .parse()
                    .map_err(|source| ConfigError::ViewMode { var, source })?;
            }
            "SHOWCASE_AUTO_ROTATE" => {
                self.auto_rotate = match value.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "on" | "yes" => true,
                    "0" | "false" | "off" | "no" => false,
                    _ => {
                        return Err(ConfigError::Bool {
                            var,
                            value: value.to_string(),
                        });
                    }
                };
            }
            "SHOWCASE_FPS_WINDOW_MS" => {
                self.fps_window_ms = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|ms| ms.is_finite() && *ms > 0.0)
                    .ok_or_else(|| ConfigError::Millis {
                        var,
                        value: value.to_string(),
                    })?;
            }
            _ => tracing::debug!("Unknown config variable {}", var),
        }
        Ok(())
    }

    /// File name used for screenshot downloads
    pub fn screenshot_filename(&self) -> String {
        let stem = self.title.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}_screenshot.png", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_scaled_dimensions() {
        let mut config = DisplayConfig::default();
        config.scale = 2.0;
        assert_eq!(config.scaled_width(), 3200);
        assert_eq!(config.scaled_height(), 1800);
    }

    #[test]
    fn test_screenshot_filename() {
        let config = ViewerConfig::default();
        assert_eq!(config.screenshot_filename(), "3D_Product_Showcase_screenshot.png");
    }

    #[test]
    fn test_view_mode_override() {
        let mut config = ViewerConfig::default();
        config.apply_override("SHOWCASE_VIEW_MODE", "textured").unwrap();
        assert_eq!(config.initial_view_mode, ViewMode::Textured);

        let err = config.apply_override("SHOWCASE_VIEW_MODE", "xray");
        assert!(matches!(err, Err(ConfigError::ViewMode { .. })));
        assert_eq!(config.initial_view_mode, ViewMode::Textured);
    }

    #[test]
    fn test_auto_rotate_override() {
        let mut config = ViewerConfig::default();
        config.apply_override("SHOWCASE_AUTO_ROTATE", "off").unwrap();
        assert!(!config.auto_rotate);
        assert!(config.apply_override("SHOWCASE_AUTO_ROTATE", "maybe").is_err());
    }

    #[test]
    fn test_fps_window_rejects_non_positive() {
        let mut config = ViewerConfig::default();
        assert!(config.apply_override("SHOWCASE_FPS_WINDOW_MS", "0").is_err());
        assert!(config.apply_override("SHOWCASE_FPS_WINDOW_MS", "-5").is_err());
        config.apply_override("SHOWCASE_FPS_WINDOW_MS", "500").unwrap();
        assert_eq!(config.fps_window_ms, 500.0);
    }
}
