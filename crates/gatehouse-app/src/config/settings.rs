//! Settings parser for config.toml

use super::types::Settings;
use gatehouse_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const GATEHOUSE_DIR: &str = "gatehouse";

const DEFAULT_CONFIG: &str = r#"# Gatehouse Configuration

[ui]
icons = "unicode"          # or "nerd_fonts"
show_background = true
title = "Gate Access"

[background]
mouse_controls = true
min_width = 20
min_height = 8
scale = 1.0
color = 0x4f46e5
background_color = 0x0b0d12
points = 12
max_distance = 22.0
spacing = 18.0

[[dashboard.samples]]
name = "Main Gate Controller"
mac_address = "3C:71:BF:4A:12:01"
access_level = "admin"
status = "approved"
added = "Added 2 weeks ago"

[[dashboard.samples]]
name = "Resident Phone"
mac_address = "A4:83:E7:2C:9F:10"
access_level = "resident"
status = "approved"
added = "Added 5 days ago"

[[dashboard.samples]]
name = "Courier Tablet"
mac_address = "F0:18:98:6B:33:7E"
access_level = "guest"
status = "pending"
added = "Added 1 hour ago"
"#;

/// `<config_dir>/gatehouse/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GATEHOUSE_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file.
///
/// Returns `Ok(false)` without touching anything when the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}
