//! A terminal Flappy-Bird clone built on ratatui.
//!
//! Physics and pipe logic live in plain structs driven by a `dt` in seconds,
//! so they can be simulated in tests without a terminal. The scene layer
//! owns rendering and input, and a validated state machine gates which scene
//! is active.

pub mod bird;
pub mod config;
pub mod game;
pub mod pipe;
pub mod scenes;
pub mod score;

pub use bird::Bird;
pub use config::FlappyConfig;
pub use pipe::{Pipe, PipeField};
pub use scenes::FlappyState;
