use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};

use vibe_invaders::assets::{FileAssetLoader, SpriteSet};
use vibe_invaders::config::GameConfig;
use vibe_invaders::constants::LOG_FILE;
use vibe_invaders::error::GameError;
use vibe_invaders::game::{Game, GameState, Pacer};
use vibe_invaders::rendering::TerminalSurface;
use vibe_invaders::terminal_io::TerminalInput;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    simple_logging::log_to_file(LOG_FILE, config.log_level)
        .with_context(|| format!("cannot open log file {}", LOG_FILE))?;
    info!("Starting vibe-invaders.");
    info!("Assets from {}, log level {}", config.asset_dir.display(), config.log_level);

    // Assets load before the terminal is touched so a failure prints cleanly.
    let loader = FileAssetLoader::new(&config.asset_dir);
    let sprites = SpriteSet::load(&loader).map_err(|e| {
        error!("Startup aborted: {}", e);
        e
    })?;

    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {}", e);
        e
    })?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let keyboard_enhanced = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();
    info!("Terminal ready (key release events: {})", keyboard_enhanced);

    let result = play(config, sprites, &mut stdout);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout.flush();

    match result {
        Ok(state) => {
            info!("Exiting after {:?}", state);
            Ok(())
        }
        Err(e) => {
            error!("Game aborted: {}", e);
            Err(e).context("game loop failed")
        }
    }
}

fn play(config: GameConfig, sprites: SpriteSet, out: &mut impl Write) -> Result<GameState, GameError> {
    let mut pacer = Pacer::new(config.tick_delay);
    let mut surface = TerminalSurface::new(out, &config);
    let mut input = TerminalInput::new();
    let mut game = Game::new(config, sprites);
    Ok(game.run(&mut input, &mut surface, &mut pacer)?)
}
