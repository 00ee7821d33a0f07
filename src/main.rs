//! The Family's Treasure Tale main entry point.
//!
//! A small narrative game written in Rust using:
//! - **bevy_ecs** for the entity store under the scenario
//! - **raylib** for windowing and graphics (cargo feature `window`)
//!
//! Without the `window` feature, or with `--headless`, the game runs the
//! title screen and then plays the scenario without a window for the given
//! number of seconds, logging every screen change.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window
//! cargo run -- --headless --seconds 60
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use familytreasure::error::ScenarioError;
use familytreasure::game::Game;
use familytreasure::resources::gameconfig::GameConfig;
use familytreasure::resources::screen::Screen;

/// The Family's Treasure Tale
#[derive(Parser)]
#[command(version, about = "A burglar, a bookshelf and a family's treasure.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Target frames per second (overrides the configuration file).
    #[arg(long)]
    fps: Option<u32>,

    /// Window width in pixels (overrides the configuration file).
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels (overrides the configuration file).
    #[arg(long)]
    height: Option<u32>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Seconds to play when running headless.
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
}

fn load_config(cli: &Cli) -> GameConfig {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{e}; using defaults");
    }
    if let Some(fps) = cli.fps {
        config.target_fps = fps;
    }
    let (width, height) = config.window_size();
    config.set_window_size(cli.width.unwrap_or(width), cli.height.unwrap_or(height));
    config
}

fn run_headless(config: GameConfig, seconds: f32) -> Result<(), ScenarioError> {
    let fps = config.target_fps;
    let mut game = Game::new(config)?;
    // Nobody is there to click "Start".
    game.enter(Screen::InGame)?;
    let run = game.run_headless(seconds, fps, Vec::new())?;
    let time = game.world_time();
    info!(
        "headless run finished on the {:?} screen: {} frames, {:.1}s of game time",
        run.screen, time.frame_count, time.elapsed
    );
    Ok(())
}

#[cfg(feature = "window")]
fn run(cli: &Cli, config: GameConfig) -> Result<(), ScenarioError> {
    if cli.headless {
        return run_headless(config, cli.seconds);
    }
    let mut host = familytreasure::render::window::WindowHost::open(&config);
    let mut game = Game::new(config)?;
    host.run(&mut game)
}

#[cfg(not(feature = "window"))]
fn run(cli: &Cli, config: GameConfig) -> Result<(), ScenarioError> {
    if !cli.headless {
        info!("built without the `window` feature, running headless");
    }
    run_headless(config, cli.seconds)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
