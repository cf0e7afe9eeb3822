use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::{debug, info};

mod config;
mod constants;
mod engine;
mod error;
mod fade;
mod frontend;
mod game;
mod layout;
mod start_screen;
mod state;
mod story;
mod texture_loader;
#[cfg(test)]
mod testing;

use crate::config::{Settings, Theme};
use crate::constants::*;
use crate::frontend::RaylibFrontend;
use crate::game::Game;

#[derive(Parser, Debug)]
#[command(name = "story-slideshow", version, about = "Full-screen story slideshow with a start menu")]
struct Cli {
    /// Run in a resizable window instead of full screen.
    #[arg(long)]
    windowed: bool,

    /// Window width in windowed mode.
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in windowed mode.
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Number of story images (assets/stories/story-1.png ..).
    #[arg(long, default_value_t = STORY_COUNT)]
    stories: usize,

    /// How long each story is shown before advancing, in milliseconds.
    #[arg(long, default_value_t = DISPLAY_DURATION_MS)]
    display_ms: u64,

    /// Opacity added per frame during a cross-fade (1-255).
    #[arg(long, default_value_t = FADE_STEP)]
    fade_step: u8,

    /// Target frames per second.
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Directory holding `core/` and `stories/`.
    #[arg(long, default_value = ASSETS_DIR)]
    assets: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            fullscreen: !self.windowed,
            window_width: self.width,
            window_height: self.height,
            fps: self.fps,
            story_count: self.stories,
            display_ms: self.display_ms,
            fade_step: self.fade_step,
            assets_dir: self.assets.clone(),
        }
    }

    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let settings = cli.settings();
    settings.validate().context("invalid command line")?;
    info!(
        stories = settings.story_count,
        display_ms = settings.display_ms,
        fade_step = settings.fade_step,
        fps = settings.fps,
        assets = %settings.assets_dir.display(),
        "starting story slideshow"
    );
    debug!(
        home = %settings.home_path().display(),
        first_story = %settings.story_path(1).display(),
        "asset locations"
    );

    let mut frontend = RaylibFrontend::open(&settings);
    let mut game = Game::new(&mut frontend, &settings, Theme::default())
        .context("failed to initialise game")?;
    game.run(&mut frontend).context("game loop failed")?;

    Ok(())
}
