//! Verb-keyed command dispatch for the text adventure.
//!
//! Free-form input is expanded through the shortcut table, parsed into a
//! [`Command`], and executed against a [`CommandContext`]. Execution returns
//! a [`CommandOutcome`] whose optional [`PostAction`] the game loop applies
//! (quit, restore a save, start over).

pub mod game;
pub mod inventory;
pub mod movement;

use crate::adventure::player::Player;
use crate::adventure::room::{Direction, Room};
use crate::adventure::save::{SaveData, SaveManager};
use std::collections::HashMap;

pub const INVALID_COMMAND: &str =
    "I don't understand that command. Type 'help' for available commands.";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Look(Option<String>),
    Examine(String),
    Take(String),
    Drop(String),
    UseItem(String),
    Inventory,
    Status,
    Stats,
    Help,
    Save(Option<u8>),
    Load(Option<u8>),
    ListSaves,
    Quit,
}

/// Mutable view of the game handed to command execution.
pub struct CommandContext<'a> {
    pub player: &'a mut Player,
    pub rooms: &'a mut HashMap<String, Room>,
    pub saves: &'a SaveManager,
}

/// Side effect a command asks the game loop to perform.
#[derive(Debug)]
pub enum PostAction {
    Quit,
    /// Replace the running game with this restored save.
    Load(Box<SaveData>),
}

/// Result of executing a command.
#[derive(Debug)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    pub action: Option<PostAction>,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            action: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(message: impl Into<String>, action: PostAction) -> Self {
        Self {
            success: true,
            message: message.into(),
            action: Some(action),
        }
    }
}

/// Expand single-word shortcuts ('n' -> 'go north', 'i' -> 'inventory').
///
/// Only the first word is expanded, so 'n' and 'n something' both work.
pub fn expand_shortcuts(input: &str) -> String {
    let mut parts = input.split_whitespace();
    let Some(first) = parts.next() else {
        return String::new();
    };

    let expansion = match first.to_lowercase().as_str() {
        "n" => "go north",
        "s" => "go south",
        "e" => "go east",
        "w" => "go west",
        "ne" => "go northeast",
        "nw" => "go northwest",
        "se" => "go southeast",
        "sw" => "go southwest",
        "u" => "go up",
        "d" => "go down",
        "l" => "look",
        "i" | "inv" => "inventory",
        "q" => "quit",
        "h" | "?" => "help",
        _ => first,
    };

    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        expansion.to_string()
    } else {
        format!("{} {}", expansion, rest.join(" "))
    }
}

/// Parse a line of input into a command. Errors are player-facing messages.
pub fn parse(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(String::new());
    };
    let verb = verb.to_lowercase();
    let arg = parts.collect::<Vec<&str>>().join(" ");

    match verb.as_str() {
        "go" | "move" | "walk" | "travel" => {
            if arg.is_empty() {
                return Err("Go where? Usage: go <direction>".to_string());
            }
            Direction::parse(&arg).map(Command::Go).ok_or_else(|| {
                let valid: Vec<&str> = Direction::ALL.iter().map(|d| d.name()).collect();
                format!(
                    "'{}' is not a valid direction. Valid directions are: {}",
                    arg,
                    valid.join(", ")
                )
            })
        }
        "look" | "observe" => Ok(Command::Look(optional(arg))),
        "examine" | "inspect" | "check" => {
            require(arg, "Examine what?").map(Command::Examine)
        }
        "get" | "take" | "grab" => require(arg, "Take what?").map(Command::Take),
        "drop" | "leave" => require(arg, "Drop what?").map(Command::Drop),
        "use" | "activate" | "employ" => require(arg, "Use what?").map(Command::UseItem),
        "inventory" | "items" => Ok(Command::Inventory),
        "status" => Ok(Command::Status),
        "stats" => Ok(Command::Stats),
        "help" | "commands" => Ok(Command::Help),
        "save" => parse_slot(&arg).map(Command::Save),
        "load" => parse_slot(&arg).map(Command::Load),
        "saves" => Ok(Command::ListSaves),
        "quit" | "exit" | "bye" => Ok(Command::Quit),
        // Bare direction names also move ('north' == 'go north')
        _ => match Direction::parse(&verb) {
            Some(dir) if arg.is_empty() => Ok(Command::Go(dir)),
            _ => Err(INVALID_COMMAND.to_string()),
        },
    }
}

/// Execute a parsed command against the game state.
pub fn execute(command: Command, ctx: &mut CommandContext) -> CommandOutcome {
    match command {
        Command::Go(direction) => movement::go(ctx, direction),
        Command::Look(target) => movement::look(ctx, target.as_deref()),
        Command::Examine(keyword) => inventory::examine(ctx, &keyword),
        Command::Take(keyword) => inventory::take(ctx, &keyword),
        Command::Drop(keyword) => inventory::drop_item(ctx, &keyword),
        Command::UseItem(keyword) => inventory::use_item(ctx, &keyword),
        Command::Inventory => CommandOutcome::success(ctx.player.inventory_display()),
        Command::Status => CommandOutcome::success(ctx.player.status_display()),
        Command::Stats => CommandOutcome::success(ctx.player.stats_display()),
        Command::Help => CommandOutcome::success(crate::adventure::world::HELP_TEXT),
        Command::Save(slot) => game::save(ctx, slot.unwrap_or(1)),
        Command::Load(slot) => game::load(ctx, slot.unwrap_or(1)),
        Command::ListSaves => game::list_saves(ctx),
        Command::Quit => CommandOutcome::with_action(
            "Thanks for playing! Your adventure ends here... for now.",
            PostAction::Quit,
        ),
    }
}

fn optional(arg: String) -> Option<String> {
    if arg.is_empty() {
        None
    } else {
        Some(arg)
    }
}

fn require(arg: String, missing: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(missing.to_string())
    } else {
        Ok(arg)
    }
}

fn parse_slot(arg: &str) -> Result<Option<u8>, String> {
    if arg.is_empty() {
        return Ok(None);
    }
    arg.parse::<u8>()
        .map(Some)
        .map_err(|_| "Invalid save slot number.".to_string())
}
