#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Viewer settings, set once from the command line
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    /// Edition file to render instead of the bundled one
    pub edition_path: Option<PathBuf>,
    /// How often to re-read `edition_path`
    pub reload_every: Option<Duration>,
}

static CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Get the viewer configuration (set from command line or default)
pub fn get_config() -> ViewerConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Daily Muse - daily recommendations viewer
#[derive(Parser, Debug)]
#[command(name = "dailymuse-desktop")]
#[command(about = "Daily Muse - today's films, records and books")]
struct Args {
    /// Edition JSON written by `dailymuse curate` (default: bundled edition)
    #[arg(short, long)]
    edition: Option<PathBuf>,

    /// Re-read the edition file every N seconds
    #[arg(long, requires = "edition")]
    reload_secs: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ViewerConfig {
        edition_path: args.edition,
        reload_every: args.reload_secs.map(|s| Duration::from_secs(s.max(1))),
    };
    tracing::info!("Starting Daily Muse with {:?}", config);
    let _ = CONFIG.set(config);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Daily Muse")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
