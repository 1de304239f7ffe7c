//! HQ Insight - Fortune 500 Headquarters Dashboard
//!
//! Desktop dashboard over the Fortune 500 headquarters dataset.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use hq_insight::config::AppConfig;
use hq_insight::data::load_table;
use hq_insight::gui::HqInsightApp;
use log::{debug, error, info, LevelFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hq_insight", version, about = "Fortune 500 headquarters dashboard")]
struct Cli {
    /// CSV file to load, overrides the config file
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON config file (default: ./hq_insight.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    match &cli.config {
        Some(path) => info!("Using config {}", path.display()),
        None => debug!("Using default config lookup"),
    }
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    info!("Loading {}", config.data_file.display());
    let data = load_table(&config.data_file);
    if let Err(e) = &data {
        error!("{}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("HQ Insight"),
        ..Default::default()
    };

    eframe::run_native(
        "HQ Insight",
        options,
        Box::new(move |cc| Ok(Box::new(HqInsightApp::new(cc, data, &config)))),
    )
    .map_err(|e| anyhow!("Window error: {}", e))
}
