#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global upload endpoint base URL, set from command line
static UPLOAD_URL: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagewright")
    })
}

/// Get the upload endpoint base URL (set from command line or default)
pub fn get_upload_url() -> String {
    UPLOAD_URL
        .get()
        .cloned()
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

/// Pagewright - About page content manager
#[derive(Parser, Debug)]
#[command(name = "pagewright-desktop")]
#[command(about = "Pagewright - local-first About page editor")]
struct Args {
    /// Data directory for storage (use different dirs for multiple sites)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the site serving POST /api/upload
    #[arg(short, long)]
    upload_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagewright")
    });
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(url) = args.upload_url {
        let _ = UPLOAD_URL.set(url);
    }

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Pagewright")
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
