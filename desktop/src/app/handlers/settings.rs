//! # Settings Handlers
//!
//! Theme configuration persistence.

use crate::ui::theme::ThemeConfig;

/// Get the default config file path
pub fn get_config_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./pythagore-config.json")
}

/// Load the theme configuration, writing the defaults out on first run so
/// the file exists for users to edit.
pub fn load_settings() -> ThemeConfig {
    let path = get_config_path();

    if !path.exists() {
        let config = ThemeConfig::default();
        if let Err(e) = config.save_to_file(&path) {
            tracing::warn!(path = ?path, error = %e, "Failed to write default theme config");
        }
        return config;
    }

    match ThemeConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!(path = ?path, "Loaded theme configuration");
            config
        }
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "Failed to load theme config. Using defaults.");
            ThemeConfig::default()
        }
    }
}
