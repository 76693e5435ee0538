use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error, info};

use crate::constants::KEY_HOLD_TICKS;

/// Logical key state for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        InputSnapshot::default()
    }

    pub fn quit() -> Self {
        InputSnapshot { quit: true, ..InputSnapshot::default() }
    }
}

/// Returns the current key state immediately; never blocks.
pub trait InputSource {
    fn poll(&mut self, tick: u64) -> io::Result<InputSnapshot>;
}

// --- TerminalInput: crossterm key events folded into held-key state ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Key {
    Left,
    Right,
    Fire,
}

pub struct TerminalInput {
    /// Last tick each key was seen pressed or repeating.
    key_tick: HashMap<Key, u64>,
    quit_requested: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput { key_tick: HashMap::new(), quit_requested: false }
    }

    pub fn handle_event(&mut self, event: Event, tick: u64) {
        let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event else {
            return;
        };

        let is_quit = matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
        if is_quit && kind != KeyEventKind::Release {
            info!("Quit requested from keyboard");
            self.quit_requested = true;
            return;
        }

        let key = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
            KeyCode::Up | KeyCode::Char(' ') => Key::Fire,
            _ => return,
        };
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_tick.insert(key, tick);
            }
            KeyEventKind::Release => {
                self.key_tick.remove(&key);
            }
        }
    }

    fn is_held(&self, key: Key, tick: u64) -> bool {
        self.key_tick
            .get(&key)
            .is_some_and(|&last| tick.saturating_sub(last) <= KEY_HOLD_TICKS)
    }

    pub fn snapshot(&self, tick: u64) -> InputSnapshot {
        InputSnapshot {
            left: self.is_held(Key::Left, tick),
            right: self.is_held(Key::Right, tick),
            fire: self.is_held(Key::Fire, tick),
            quit: self.quit_requested,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        TerminalInput::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, tick: u64) -> io::Result<InputSnapshot> {
        while event::poll(Duration::ZERO).map_err(|e| {
            error!("Failed to poll event: {}", e);
            e
        })? {
            let ev = event::read().map_err(|e| {
                error!("Failed to read event: {}", e);
                e
            })?;
            self.handle_event(ev, tick);
        }
        Ok(self.snapshot(tick))
    }
}

// --- SimulatedInput: scripted snapshots for headless runs ---
pub struct SimulatedInput {
    script: HashMap<u64, InputSnapshot>,
    fallback: InputSnapshot,
    polls: u64,
}

impl SimulatedInput {
    pub fn new(script: HashMap<u64, InputSnapshot>) -> Self {
        SimulatedInput { script, fallback: InputSnapshot::idle(), polls: 0 }
    }

    /// Same snapshot on every tick.
    pub fn constant(snapshot: InputSnapshot) -> Self {
        SimulatedInput { script: HashMap::new(), fallback: snapshot, polls: 0 }
    }

    pub fn idle() -> Self {
        SimulatedInput::constant(InputSnapshot::idle())
    }

    pub fn at(mut self, tick: u64, snapshot: InputSnapshot) -> Self {
        self.script.insert(tick, snapshot);
        self
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for SimulatedInput {
    fn poll(&mut self, tick: u64) -> io::Result<InputSnapshot> {
        self.polls += 1;
        let snapshot = self.script.get(&tick).copied().unwrap_or(self.fallback);
        debug!("Simulated input at tick {}: {:?}", tick, snapshot);
        Ok(snapshot)
    }
}
