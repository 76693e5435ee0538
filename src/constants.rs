use std::time::Duration;

// --- Screen ---
pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;
pub const SCREEN_ROWS: i32 = 10; // Rows the fleet descends through

// --- Fleet ---
pub const ALIEN_ROWS: usize = 3;
pub const ALIENS_PER_ROW: usize = 3;
pub const ALIEN_SPEED: i32 = 15;
pub const ALIEN_MOVE_PERIOD: u64 = 5; // Ticks between fleet steps

// --- Player / lasers ---
pub const PLAYER_SPEED: i32 = 15;
pub const LASER_SPEED: i32 = 15;

// --- Pacing ---
pub const TICK_DELAY: Duration = Duration::from_millis(100);
pub const GAME_OVER_GRACE: Duration = Duration::from_millis(1000);

// --- Terminal raster ---
pub const PIXELS_PER_COLUMN: i32 = 10;
pub const PIXELS_PER_ROW: i32 = 20;
pub const KEY_HOLD_TICKS: u64 = 2; // Key stays held this long without a repeat event

// --- Assets ---
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const ASSET_EXTENSION: &str = "sprite";
pub const ALIEN_WINGS_DOWN_ASSET: &str = "alien_wings_down";
pub const ALIEN_WINGS_UP_ASSET: &str = "alien_wings_up";
pub const PLAYER_ASSET: &str = "cannon";
pub const LASER_ASSET: &str = "laser";

pub const LOG_FILE: &str = "vibe-invaders.log";
