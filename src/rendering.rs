use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::{debug, error};

use crate::assets::Sprite;
use crate::config::GameConfig;
use crate::constants::{PIXELS_PER_COLUMN, PIXELS_PER_ROW};
use crate::types::Rect;

/// Where a frame ends up. The game clears, blits every live entity, then
/// presents once per tick.
pub trait RenderSurface {
    fn clear(&mut self) -> io::Result<()>;
    fn blit(&mut self, sprite: &Sprite, rect: Rect) -> io::Result<()>;
    fn banner(&mut self, message: &str) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

// --- GameGrid: pixel rects rasterised onto character cells ---
pub struct GameGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
        }
    }

    pub fn for_screen(config: &GameConfig) -> Self {
        let width = (config.screen_width / PIXELS_PER_COLUMN).max(1) as u16;
        let height = (config.screen_height / PIXELS_PER_ROW).max(1) as u16;
        GameGrid::new(width, height)
    }

    /// Off-grid cells are dropped.
    pub fn set_char(&mut self, x: i32, y: i32, c: char) {
        if x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn get_char(&self, x: u16, y: u16) -> Option<char> {
        self.grid.get(y as usize).and_then(|row| row.get(x as usize)).copied()
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    /// Draws the sprite's glyphs starting at the cell containing the rect's
    /// top-left pixel. Spaces in the art are transparent.
    pub fn blit(&mut self, sprite: &Sprite, rect: Rect) {
        let col = rect.x.div_euclid(PIXELS_PER_COLUMN);
        let row = rect.y.div_euclid(PIXELS_PER_ROW);
        for (dy, line) in sprite.art.iter().enumerate() {
            for (dx, c) in line.chars().enumerate() {
                if c != ' ' {
                    self.set_char(col + dx as i32, row + dy as i32, c);
                }
            }
        }
    }

    pub fn banner(&mut self, message: &str) {
        let len = message.chars().count() as i32;
        let x = (self.width as i32 - len) / 2;
        let y = self.height as i32 / 2;
        for (i, c) in message.chars().enumerate() {
            self.set_char(x + i as i32, y, c);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().collect()).collect()
    }
}

// --- TerminalSurface: the grid written through crossterm ---
pub struct TerminalSurface<W: Write> {
    out: W,
    grid: GameGrid,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, config: &GameConfig) -> Self {
        TerminalSurface { out, grid: GameGrid::for_screen(config) }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, rect: Rect) -> io::Result<()> {
        self.grid.blit(sprite, rect);
        Ok(())
    }

    fn banner(&mut self, message: &str) -> io::Result<()> {
        self.grid.banner(message);
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        for (y, line) in self.grid.lines().iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(line), Clear(ClearType::UntilNewLine))?;
        }
        self.out.flush().map_err(|e| {
            error!("Failed to flush frame: {}", e);
            e
        })
    }
}

// --- ScreenBuffer: headless surface that keeps the last frame ---
pub struct ScreenBuffer {
    grid: GameGrid,
    last_frame: Vec<String>,
    frames_presented: u64,
}

impl ScreenBuffer {
    pub fn new(config: &GameConfig) -> Self {
        ScreenBuffer {
            grid: GameGrid::for_screen(config),
            last_frame: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn last_frame(&self) -> &[String] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn print_to_log(&self) {
        debug!("--- Screen Buffer (frame {}) ---", self.frames_presented);
        for row in &self.last_frame {
            debug!("{}", row);
        }
    }
}

impl RenderSurface for ScreenBuffer {
    fn clear(&mut self) -> io::Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, rect: Rect) -> io::Result<()> {
        self.grid.blit(sprite, rect);
        Ok(())
    }

    fn banner(&mut self, message: &str) -> io::Result<()> {
        self.grid.banner(message);
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.last_frame = self.grid.lines();
        self.frames_presented += 1;
        self.print_to_log();
        Ok(())
    }
}
