pub mod config;
pub mod error;
pub mod marker;
pub mod parabola_app;
pub mod parabola_curve;
pub mod point;
pub mod quadratic;
pub mod sprites;

use std::env;
use std::path::PathBuf;
use ggez::{conf, event, ContextBuilder, GameResult};
use log::info;
use config::ParabolaConfig;
use parabola_app::ParabolaApp;

pub use error::{ConfigError, ParabolaError};
pub use parabola_curve::{Facing, FitMode, Parabola};

pub fn run(config: ParabolaConfig) -> GameResult {
    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        PathBuf::from("./resources")
    };

    let (mut ctx, event_loop) = ContextBuilder::new("parabola", "parabola")
        .window_setup(conf::WindowSetup::default().title(&config.window.title))
        .window_mode(conf::WindowMode::default().dimensions(config.window.width, config.window.height))
        .add_resource_path(resource_dir)
        .build()?;

    info!(
        "Trajectory from {:?} to {:?}, fit {}",
        config.from, config.to, config.style.fit
    );
    let state = ParabolaApp::new(&mut ctx, &config)?;
    event::run(ctx, event_loop, state)
}
