//! Parlor - Two Small Terminal Games
//!
//! A console text adventure (`adventure` binary) and a terminal Flappy Bird
//! clone (`flappy` binary) sharing a validated state machine and flat-JSON
//! persistence. This module exposes the game logic for testing and external
//! use.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod adventure;
pub mod build_info;
pub mod core;
pub mod flappy;
pub mod utils;
