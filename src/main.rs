#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
mod context;
mod motion;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Product name shown in the window title and startup banner
const SITE_NAME: &str = "Warm Agent";
/// One-line pitch
const SITE_TAGLINE: &str = "Give your AI a warmer voice";
/// Project homepage
const SITE_URL: &str = "https://warm-agent.com";

/// Warm Agent - single-page marketing site
#[derive(Parser, Debug)]
#[command(name = "warmsite-desktop")]
#[command(about = "Warm Agent marketing site")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Startup banner
    tracing::info!("🤖 {}", SITE_NAME);
    tracing::info!("{}", SITE_TAGLINE);
    tracing::info!("Learn more: {}", SITE_URL);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(SITE_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
