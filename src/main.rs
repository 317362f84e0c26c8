//! Gatehouse - terminal dashboard for gate access devices
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use gatehouse_app::config::{self, IconMode};
use gatehouse_core::logging;
use tracing::info;

/// Gatehouse - register gate access devices and drive the gate
#[derive(Parser, Debug)]
#[command(name = "gatehouse")]
#[command(about = "Terminal dashboard for gate access devices", long_about = None)]
struct Args {
    /// Settings file (default: <config_dir>/gatehouse/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, commands on stdin)
    #[arg(long)]
    headless: bool,

    /// Icon set: unicode or nerd_fonts
    #[arg(long, value_name = "MODE")]
    icons: Option<IconMode>,

    /// Do not draw the animated net background
    #[arg(long)]
    no_background: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let config_path = args
        .config
        .or_else(config::default_config_path)
        .unwrap_or_else(|| PathBuf::from("gatehouse.toml"));

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    let mut settings = config::load_settings(&config_path);
    if let Some(icons) = args.icons {
        settings.ui.icons = icons;
    }
    if args.no_background {
        settings.ui.show_background = false;
    }
    info!(
        "Loaded settings from {} (icons={}, background={})",
        config_path.display(),
        settings.ui.icons,
        settings.ui.show_background
    );

    let result = if args.headless {
        gatehouse::run_headless(settings).await
    } else {
        gatehouse::run(settings).await
    };

    if let Err(e) = &result {
        if e.is_fatal() {
            eprintln!("gatehouse: {}", e);
            eprintln!("Log file: {}", logging::get_current_log_file().display());
        }
    }
    Ok(result?)
}
