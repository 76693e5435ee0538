use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::{LevelFilter, warn};

use crate::constants::*;

/// Tunables for one run. Built once at startup and only ever borrowed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub screen_rows: i32,
    pub alien_rows: usize,
    pub aliens_per_row: usize,
    pub alien_speed: i32,
    pub alien_move_period: u64,
    pub player_speed: i32,
    pub laser_speed: i32,
    pub tick_delay: Duration,
    pub game_over_grace: Duration,
    pub asset_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            screen_rows: SCREEN_ROWS,
            alien_rows: ALIEN_ROWS,
            aliens_per_row: ALIENS_PER_ROW,
            alien_speed: ALIEN_SPEED,
            alien_move_period: ALIEN_MOVE_PERIOD,
            player_speed: PLAYER_SPEED,
            laser_speed: LASER_SPEED,
            tick_delay: TICK_DELAY,
            game_over_grace: GAME_OVER_GRACE,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Defaults, with the asset directory and log level taken from
    /// `INVADERS_ASSET_DIR` / `INVADERS_LOG_LEVEL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = GameConfig::default();
        if let Some(dir) = lookup("INVADERS_ASSET_DIR") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("INVADERS_LOG_LEVEL") {
            match level.parse::<LevelFilter>() {
                Ok(parsed) => config.log_level = parsed,
                Err(_) => warn!("Ignoring unknown INVADERS_LOG_LEVEL {:?}", level),
            }
        }
        config
    }

    pub fn horizontal_spacing(&self) -> i32 {
        self.screen_width / self.aliens_per_row as i32
    }

    pub fn vertical_spacing(&self) -> i32 {
        self.screen_height / self.screen_rows
    }
}
