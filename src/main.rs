use std::path::{Path, PathBuf};
use anyhow::Context as _;
use clap::Parser;
use ggez::glam::Vec2;
use log::info;
use parabola::config::{parse_point, ParabolaConfig};
use parabola::FitMode;

const DEFAULT_CONFIG: &str = "parabola.toml";

/// Draws a parabolic trajectory with an arrow head between two screen points.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML). Defaults to ./parabola.toml when present.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start of the trajectory, as X,Y in screen pixels.
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    from: Option<Vec2>,

    /// Destination of the trajectory, as X,Y in screen pixels.
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    to: Option<Vec2>,

    /// Curve fit: exact or vertex-midpoint.
    #[arg(long)]
    fit: Option<FitMode>,
}

fn load_config(args: &Args) -> anyhow::Result<ParabolaConfig> {
    let mut config = match &args.config {
        Some(path) => ParabolaConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => ParabolaConfig::load(DEFAULT_CONFIG)
            .with_context(|| format!("loading {}", DEFAULT_CONFIG))?,
        None => ParabolaConfig::default(),
    };

    if let Some(from) = args.from {
        config.from = from.to_array();
    }
    if let Some(to) = args.to {
        config.to = to.to_array();
    }
    if let Some(fit) = args.fit {
        config.style.fit = fit;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!("Starting with {:?}", config);

    parabola::run(config).map_err(|e| anyhow::anyhow!("game loop failed: {}", e))?;
    Ok(())
}
