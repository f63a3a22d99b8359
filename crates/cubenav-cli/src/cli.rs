//! CLI argument definitions for cubenav.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cubenav")]
#[command(about = "Rotating cube menu, driven from the terminal", version)]
pub struct Args {
    /// Widget config file (TOML)
    #[arg(long, short, global = true, env = "CUBENAV_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session: arrow keys, Esc, Enter and mouse clicks
    Run {
        /// Skip the intro animation
        #[arg(long)]
        no_intro: bool,
        /// Target frame rate
        #[arg(long, default_value = "60")]
        fps: u32,
    },
    /// Feed a key sequence to the widget without a terminal UI
    Simulate {
        /// Comma-separated keys (up, down, left, right, back, select, or key names like ArrowUp)
        #[arg(long, short, value_delimiter = ',', required = true)]
        keys: Vec<String>,
        /// Frames to run after each key
        #[arg(long, default_value = "90")]
        frames: u32,
        /// Output one JSON object per key
        #[arg(long)]
        json: bool,
    },
    /// Classify a click at texture coordinates (u, v)
    Classify {
        u: f32,
        v: f32,
        /// Material slot that was hit (front face by default)
        #[arg(long, default_value = "4")]
        material: usize,
    },
}
