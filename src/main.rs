use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use player_controls::fullscreen::{FullscreenApi, SimulatedFullscreenHost};
use player_controls::session::{OutputFormat, Session};
use player_controls::utils::load_config;
use player_controls::widgets::WidgetLayout;

/// player-controls - replay scripted sessions against the control surface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session script to replay (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Configuration file (defaults to the user config file)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Progress track width in pixels
    #[arg(long, default_value = "640")]
    progress_width: f64,

    /// Volume track width in pixels
    #[arg(long, default_value = "100")]
    volume_width: f64,

    /// Fullscreen entry points the simulated host offers
    #[arg(
        long = "fullscreen-api",
        value_name = "API",
        value_delimiter = ',',
        default_value = "standard"
    )]
    fullscreen_apis: Vec<FullscreenApi>,

    /// Render `show` output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting player-controls v{}", env!("CARGO_PKG_VERSION"));

    let layout = WidgetLayout {
        progress_width: args.progress_width,
        volume_width: args.volume_width,
    };
    let host = SimulatedFullscreenHost::new(args.fullscreen_apis.clone());
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(&config, layout, Box::new(host), format);

    let stdout = io::stdout().lock();
    let applied = match &args.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
            session.run(BufReader::new(file), stdout)?
        }
        None => session.run(io::stdin().lock(), stdout)?,
    };

    info!("Applied {} commands", applied);
    Ok(())
}
