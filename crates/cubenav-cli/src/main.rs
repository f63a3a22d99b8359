mod cli;
mod commands;
mod terminal;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use cubenav_core::WidgetConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr so that `simulate --json` output stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cubenav=warn,cubenav_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref());

    match args.command {
        Some(Command::Run { no_intro, fps }) => commands::run::run(config, no_intro, fps),
        Some(Command::Simulate { keys, frames, json }) => {
            commands::simulate::run(config, &keys, frames, json)
        }
        Some(Command::Classify { u, v, material }) => {
            commands::classify::run(&config, u, v, material)
        }
        None => commands::run::run(config, false, 60),
    }
}

/// Load the widget config, falling back to defaults when it cannot be read.
fn load_config(path: Option<&Path>) -> WidgetConfig {
    let Some(path) = path else {
        return WidgetConfig::default();
    };
    match WidgetConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", path, e);
            WidgetConfig::default()
        }
    }
}
