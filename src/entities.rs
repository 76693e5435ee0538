use crate::assets::SpriteHandle;
use crate::config::GameConfig;
use crate::types::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Both keys held cancel out.
    pub fn from_keys(left: bool, right: bool) -> Option<Direction> {
        match (left, right) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn offset(self, speed: i32) -> i32 {
        match self {
            Direction::Left => -speed,
            Direction::Right => speed,
        }
    }
}

// --- Player ---
pub struct Player {
    pub rect: Rect,
    pub sprite: SpriteHandle,
}

impl Player {
    /// Bottom-left corner of the screen.
    pub fn new(sprite: SpriteHandle, config: &GameConfig) -> Self {
        let rect = Rect::new(0, config.screen_height - sprite.height, sprite.width, sprite.height);
        Player { rect, sprite }
    }

    pub fn move_toward(&mut self, direction: Direction, config: &GameConfig) {
        let moved = self.rect.translate(direction.offset(config.player_speed), 0);
        self.rect = if moved.left() < 0 {
            moved.translate(-moved.left(), 0)
        } else if moved.right() > config.screen_width {
            moved.translate(config.screen_width - moved.right(), 0)
        } else {
            moved
        };
    }
}

// --- Laser ---
pub struct Laser {
    pub rect: Rect,
    pub sprite: SpriteHandle,
}

impl Laser {
    /// Centered on the cannon, bottom edge resting on the player's top edge.
    pub fn fire_from(player: &Rect, sprite: SpriteHandle) -> Self {
        let rect = Rect::new(
            player.center_x() - sprite.width / 2,
            player.top() - sprite.height,
            sprite.width,
            sprite.height,
        );
        Laser { rect, sprite }
    }

    pub fn advance(&mut self, speed: i32) {
        self.rect = self.rect.translate(0, -speed);
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() < 0
    }
}

// --- Alien ---
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub rect: Rect,
    pub row: usize,
    pub column: usize,
    pub alive: bool,
}

impl Alien {
    pub fn new(rect: Rect, row: usize, column: usize) -> Self {
        Alien { rect, row, column, alive: true }
    }
}
