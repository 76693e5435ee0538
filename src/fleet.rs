//! The alien fleet: one grid, one shared velocity, one animation frame.
//!
//! Edge handling is decided once per step from the leading edge of the live
//! aliens, then applied to every alien as the same translation. A step that
//! would carry the fleet past either screen edge becomes a pure descent step
//! and reverses the horizontal velocity for the steps that follow.

use log::{debug, info};

use crate::config::GameConfig;
use crate::entities::Alien;
use crate::types::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WingFrame {
    Up,
    Down,
}

impl WingFrame {
    pub fn toggled(self) -> WingFrame {
        match self {
            WingFrame::Up => WingFrame::Down,
            WingFrame::Down => WingFrame::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

/// What a single processed fleet step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetStep {
    Idle,
    Sweep { dx: i32 },
    Descend { dy: i32 },
}

pub struct Fleet {
    /// Rows top to bottom, columns left to right. Dead aliens keep their slot.
    rows: Vec<Vec<Alien>>,
    velocity: Velocity,
    frame: WingFrame,
    screen_width: i32,
    speed: i32,
    move_period: u64,
}

impl Fleet {
    /// Lays out `alien_rows x aliens_per_row` aliens of the given pixel size
    /// across the top of the screen.
    pub fn new(config: &GameConfig, alien_width: i32, alien_height: i32) -> Self {
        let dx = config.horizontal_spacing();
        let dy = config.vertical_spacing();
        let rows = (0..config.alien_rows)
            .map(|row| {
                (0..config.aliens_per_row)
                    .map(|column| {
                        let rect = Rect::new(
                            column as i32 * dx,
                            row as i32 * dy,
                            alien_width,
                            alien_height,
                        );
                        Alien::new(rect, row, column)
                    })
                    .collect()
            })
            .collect();
        Fleet::from_rows(rows, config)
    }

    pub fn from_rows(rows: Vec<Vec<Alien>>, config: &GameConfig) -> Self {
        Fleet {
            rows,
            velocity: Velocity { vx: config.alien_speed, vy: 0 },
            frame: WingFrame::Up,
            screen_width: config.screen_width,
            speed: config.alien_speed,
            move_period: config.alien_move_period.max(1),
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn frame(&self) -> WingFrame {
        self.frame
    }

    pub fn aliens(&self) -> impl Iterator<Item = &Alien> {
        self.rows.iter().flatten()
    }

    pub fn aliens_mut(&mut self) -> impl Iterator<Item = &mut Alien> {
        self.rows.iter_mut().flatten()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Alien> {
        self.aliens().filter(|a| a.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn is_destroyed(&self) -> bool {
        self.alive().next().is_none()
    }

    /// `(min_left, max_right)` over live aliens.
    pub fn leading_edges(&self) -> Option<(i32, i32)> {
        self.alive().fold(None, |edges, alien| {
            let (left, right) = (alien.rect.left(), alien.rect.right());
            Some(match edges {
                None => (left, right),
                Some((l, r)) => (l.min(left), r.max(right)),
            })
        })
    }

    /// Advances the fleet if `tick` falls on the movement cadence.
    pub fn update(&mut self, tick: u64) -> FleetStep {
        if tick % self.move_period != 0 {
            return FleetStep::Idle;
        }
        self.step()
    }

    /// One processed fleet step, ignoring cadence.
    pub fn step(&mut self) -> FleetStep {
        let Some((min_left, max_right)) = self.leading_edges() else {
            return FleetStep::Idle;
        };

        let vx = self.velocity.vx;
        let crosses_edge = min_left + vx < 0 || max_right + vx > self.screen_width;
        let step = if crosses_edge {
            self.velocity = Velocity { vx: -vx, vy: self.speed };
            info!(
                "Fleet reached edge (left {}, right {}); reversing to vx {}",
                min_left, max_right, -vx
            );
            FleetStep::Descend { dy: self.velocity.vy }
        } else {
            FleetStep::Sweep { dx: vx }
        };

        let (dx, dy) = match step {
            FleetStep::Sweep { dx } => (dx, 0),
            FleetStep::Descend { dy } => (0, dy),
            FleetStep::Idle => (0, 0),
        };
        for alien in self.aliens_mut() {
            alien.rect = alien.rect.translate(dx, dy);
        }

        self.frame = self.frame.toggled();
        self.velocity.vy = 0;
        debug!("Fleet step {:?}, frame {:?}", step, self.frame);
        step
    }
}
