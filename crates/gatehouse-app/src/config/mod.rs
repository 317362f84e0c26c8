//! Configuration module
//!
//! Settings are read from `<config_dir>/gatehouse/config.toml` unless a
//! path is given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::{
    BackgroundSettings, DashboardSettings, IconMode, SampleDevice, Settings, UiSettings,
};
