use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::assets::{SpriteHandle, SpriteSet};
use crate::collision::resolve_collisions;
use crate::config::GameConfig;
use crate::entities::{Direction, Laser, Player};
use crate::fleet::{Fleet, WingFrame};
use crate::rendering::RenderSurface;
use crate::terminal_io::{InputSnapshot, InputSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Every alien destroyed.
    GameOver,
    /// Quit signal from the input source.
    Quit,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Running
    }
}

/// Fixed-timestep pacing: ticks start on a grid of absolute deadlines, so
/// fast frames sleep the remainder and a slow frame does not shift the
/// schedule. Falling more than a full period behind re-bases the grid
/// instead of bursting through catch-up ticks.
pub struct Pacer {
    period: Duration,
    next_deadline: Instant,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Pacer { period, next_deadline: Instant::now() + period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick is due. Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        if self.period.is_zero() {
            return Duration::ZERO;
        }
        let now = Instant::now();
        if now < self.next_deadline {
            let remaining = self.next_deadline - now;
            thread::sleep(remaining);
            self.next_deadline += self.period;
            return remaining;
        }

        let behind = now - self.next_deadline;
        if behind > self.period {
            warn!("Tick overran by {:?}; re-basing schedule", behind);
            self.next_deadline = now + self.period;
        } else {
            self.next_deadline += self.period;
        }
        Duration::ZERO
    }
}

pub struct Game {
    config: GameConfig,
    sprites: SpriteSet,
    pub player: Player,
    pub fleet: Fleet,
    pub lasers: Vec<Laser>,
    tick: u64,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, sprites: SpriteSet) -> Self {
        let player = Player::new(sprites.cannon.clone(), &config);
        let alien = &sprites.alien_wings_up;
        let fleet = Fleet::new(&config, alien.width, alien.height);
        info!(
            "New game: {} aliens, player at ({}, {})",
            fleet.alive_count(),
            player.rect.x,
            player.rect.y
        );
        Game {
            config,
            sprites,
            player,
            fleet,
            lasers: Vec::new(),
            tick: 0,
            state: GameState::Running,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn alien_sprite(&self) -> &SpriteHandle {
        match self.fleet.frame() {
            WingFrame::Up => &self.sprites.alien_wings_up,
            WingFrame::Down => &self.sprites.alien_wings_down,
        }
    }

    /// Runs one tick. Terminal states are sticky and do no further work.
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl RenderSurface,
    ) -> io::Result<GameState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        if self.fleet.is_destroyed() {
            info!("All aliens destroyed after {} ticks", self.tick);
            self.state = GameState::GameOver;
            return Ok(self.state);
        }

        let keys = input.poll(self.tick)?;
        if keys.quit {
            info!("Quit at tick {}", self.tick);
            self.state = GameState::Quit;
            return Ok(self.state);
        }

        surface.clear()?;
        self.update(keys);
        self.draw(surface)?;
        surface.present()?;
        self.tick += 1;
        Ok(self.state)
    }

    fn update(&mut self, keys: InputSnapshot) {
        if let Some(direction) = Direction::from_keys(keys.left, keys.right) {
            self.player.move_toward(direction, &self.config);
        }

        if keys.fire {
            self.lasers.push(Laser::fire_from(&self.player.rect, self.sprites.laser.clone()));
        }
        let speed = self.config.laser_speed;
        self.lasers.retain_mut(|laser| {
            laser.advance(speed);
            !laser.is_off_screen()
        });

        self.fleet.update(self.tick);

        let kills = resolve_collisions(&mut self.fleet, &mut self.lasers);
        if kills > 0 {
            debug!("{} kill(s) at tick {}, {} aliens left", kills, self.tick, self.fleet.alive_count());
        }
    }

    fn draw(&self, surface: &mut impl RenderSurface) -> io::Result<()> {
        surface.blit(&self.player.sprite, self.player.rect)?;
        for laser in &self.lasers {
            surface.blit(&laser.sprite, laser.rect)?;
        }
        let alien_sprite = self.alien_sprite();
        for alien in self.fleet.alive() {
            surface.blit(alien_sprite, alien.rect)?;
        }
        Ok(())
    }

    /// Steps until the game ends, pacing each completed tick. A finished
    /// fleet gets a GAME OVER frame and the grace pause before returning.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl RenderSurface,
        pacer: &mut Pacer,
    ) -> io::Result<GameState> {
        info!("Game loop started ({:?} per tick)", pacer.period());
        loop {
            match self.step(input, surface)? {
                GameState::Running => {
                    pacer.wait();
                }
                GameState::GameOver => {
                    surface.clear()?;
                    surface.banner("GAME OVER")?;
                    surface.present()?;
                    thread::sleep(self.config.game_over_grace);
                    return Ok(GameState::GameOver);
                }
                GameState::Quit => return Ok(GameState::Quit),
            }
        }
    }
}
