//! A terminal Space Invaders: a cannon, a three-by-three alien fleet and a
//! fixed 100 ms tick.
//!
//! The simulation works in screen pixels (600x400) and knows nothing about
//! terminals; `rendering` and `terminal_io` adapt it to crossterm.

pub mod assets;
pub mod collision;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod rendering;
pub mod terminal_io;
pub mod types;
