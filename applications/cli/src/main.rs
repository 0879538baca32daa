//! vmp - drive the audio/video player from the terminal
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vmp_cli::commands::HELP;
use vmp_cli::{AppConfig, Driver, OnError};

#[derive(Parser)]
#[command(name = "vmp")]
#[command(about = "Drive the VMP audio/video player from a script or stdin", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./vmp.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the audio and video assets
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Command script to run instead of reading stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(assets) = cli.assets {
        config.assets.root = Some(assets);
    }
    config.validate()?;

    // Initialize tracing; stdout carries player output only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting vmp");
    let mut driver = Driver::new(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {:?}", path))?;
            driver.run(BufReader::new(file), &mut out, OnError::Abort)?;
        }
        None => {
            writeln!(out, "{}", HELP)?;
            driver.run(io::stdin().lock(), &mut out, OnError::Report)?;
        }
    }

    Ok(())
}
