//! # GUI Theme
//!
//! Chalkboard-style dark theme for egui: deep green-black background with
//! warm chalk text, a blue accent for the student's side of the conversation.

use crate::core::error::{AppError, Result};
use egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Window background
    pub background: [u8; 3],
    /// Panel / bubble fill
    pub panel: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Secondary text (labels, hints, thinking indicator)
    pub text_dim: [u8; 3],
    /// Accent (student bubbles, selection)
    pub accent: [u8; 3],
    /// Accent for the active level button
    pub accent_active: [u8; 3],
    /// Success green (backend online)
    pub success: [u8; 3],
    /// Error red (backend offline)
    pub error: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [18, 24, 22],
            panel: [30, 38, 35],
            text: [235, 235, 225],
            text_dim: [150, 158, 152],
            accent: [52, 98, 168],
            accent_active: [64, 120, 200],
            success: [90, 200, 120],
            error: [220, 80, 80],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: ThemeConfig = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize theme: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| AppError::Config(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Resolve the configuration into egui colors
    pub fn colors(&self) -> Colors {
        Colors {
            background: rgb(self.background),
            panel: rgb(self.panel),
            text: rgb(self.text),
            text_dim: rgb(self.text_dim),
            accent: rgb(self.accent),
            accent_active: rgb(self.accent_active),
            success: rgb(self.success),
            error: rgb(self.error),
        }
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Resolved color palette
#[derive(Clone)]
pub struct Colors {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub accent_active: Color32,
    pub success: Color32,
    pub error: Color32,
}

/// Apply the theme to the egui context
pub fn apply(ctx: &Context, config: &ThemeConfig) {
    let colors = config.colors();

    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(colors.text);
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.panel;
    visuals.extreme_bg_color = colors.panel;
    visuals.widgets.noninteractive.bg_fill = colors.panel;
    visuals.selection.bg_fill = colors.accent;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ThemeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ThemeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.background, config.background);
        assert_eq!(parsed.accent, config.accent);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("pythagore-theme-{}.json", std::process::id()));

        let mut config = ThemeConfig::default();
        config.accent = [1, 2, 3];
        config.save_to_file(&path).unwrap();

        let loaded = ThemeConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.accent, [1, 2, 3]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = ThemeConfig::load_from_file(Path::new("/nonexistent/pythagore.json"))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
