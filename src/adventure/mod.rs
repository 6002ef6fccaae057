//! Console text adventure: explore a small dungeon, collect items, and
//! escape the dark with a lamp and a rusty key.
//!
//! Free-form verb commands are parsed and dispatched by [`commands`]; the
//! world content lives in [`world`]; progress is saved to numbered JSON
//! slots by [`save`].

pub mod commands;
pub mod game;
pub mod item;
pub mod player;
pub mod room;
pub mod save;
pub mod world;

pub use game::{AdventureState, Game};
pub use item::{Item, ItemEffect, UseOutcome};
pub use player::Player;
pub use room::{Direction, Room};
