//! Top-level adventure game: state machine, menu, and the input loop.
//!
//! All gameplay flows through [`Game::handle_line`], which takes one line of
//! player input and returns the text to print. The stdin loop in [`Game::run`]
//! is a thin shell around it, so tests can drive whole sessions line by line.

use crate::adventure::commands::{self, CommandContext, PostAction};
use crate::adventure::player::Player;
use crate::adventure::room::Room;
use crate::adventure::save::{SaveData, SaveManager};
use crate::adventure::world;
use crate::core::state_machine::StateMachine;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Coarse phases of an adventure session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdventureState {
    Menu,
    Playing,
    Saving,
    Loading,
    Quit,
}

fn transition_table() -> Vec<(AdventureState, Vec<AdventureState>)> {
    use AdventureState::*;
    vec![
        (Menu, vec![Playing, Loading, Quit]),
        (Playing, vec![Saving, Menu, Quit]),
        (Saving, vec![Playing]),
        (Loading, vec![Playing, Menu]),
        (Quit, vec![]),
    ]
}

/// What the main menu is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuMode {
    Root,
    AwaitingName,
    AwaitingLoadSlot,
}

pub struct Game {
    machine: StateMachine<AdventureState>,
    menu_mode: MenuMode,
    player: Player,
    rooms: HashMap<String, Room>,
    saves: SaveManager,
}

impl Game {
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_save_manager(SaveManager::new()?))
    }

    /// Build a game against an explicit save directory.
    pub fn with_save_manager(saves: SaveManager) -> Self {
        Self {
            machine: StateMachine::new(AdventureState::Menu, transition_table()),
            menu_mode: MenuMode::Root,
            player: Player::new("Adventurer".to_string(), world::STARTING_ROOM),
            rooms: world::build_rooms(),
            saves,
        }
    }

    pub fn state(&self) -> AdventureState {
        self.machine.current()
    }

    pub fn is_running(&self) -> bool {
        self.machine.current() != AdventureState::Quit
    }

    /// Lines to print when the game first starts.
    pub fn intro(&self) -> Vec<String> {
        vec![
            "=== The Forgotten Study ===".to_string(),
            "A small text adventure.".to_string(),
            menu_text(),
        ]
    }

    /// Process one line of input and return the lines to print.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let mut out = match self.machine.current() {
            AdventureState::Menu => self.handle_menu_line(line),
            AdventureState::Playing | AdventureState::Saving | AdventureState::Loading => {
                self.handle_play_line(line)
            }
            AdventureState::Quit => Vec::new(),
        };

        // Entering a phase prints its opening text, wherever the change
        // came from.
        for transition in self.machine.drain_events() {
            match transition.to {
                AdventureState::Menu if self.menu_mode == MenuMode::Root => {
                    out.push(menu_text())
                }
                AdventureState::Playing
                    if matches!(
                        transition.from,
                        AdventureState::Menu | AdventureState::Loading
                    ) =>
                {
                    out.push(self.describe_current_room());
                }
                _ => {}
            }
        }
        out
    }

    fn handle_menu_line(&mut self, line: &str) -> Vec<String> {
        let choice = line.trim();
        match self.menu_mode {
            MenuMode::Root => match choice {
                "1" => {
                    self.menu_mode = MenuMode::AwaitingName;
                    vec!["What is your name, adventurer?".to_string()]
                }
                "2" => {
                    let infos = self.saves.list_saves();
                    if infos.is_empty() {
                        return vec![
                            "There are no saved games yet.".to_string(),
                            menu_text(),
                        ];
                    }
                    self.menu_mode = MenuMode::AwaitingLoadSlot;
                    let mut out = vec!["Saved games:".to_string()];
                    for info in infos {
                        if info.is_corrupted {
                            out.push(format!("  Slot {}: [corrupted]", info.slot));
                        } else {
                            out.push(format!(
                                "  Slot {}: {} - {} ({} min played)",
                                info.slot, info.player_name, info.timestamp, info.game_time
                            ));
                        }
                    }
                    out.push("Which slot? (or 'back')".to_string());
                    out
                }
                "3" => vec![world::HELP_TEXT.to_string(), menu_text()],
                "4" | "q" | "quit" => {
                    self.machine.change_state(AdventureState::Quit);
                    vec!["Goodbye!".to_string()]
                }
                _ => vec!["Please choose an option from 1 to 4.".to_string()],
            },
            MenuMode::AwaitingName => {
                let name = if choice.is_empty() { "Adventurer" } else { choice };
                self.start_new_game(name)
            }
            MenuMode::AwaitingLoadSlot => {
                if choice.eq_ignore_ascii_case("back") {
                    self.menu_mode = MenuMode::Root;
                    return vec![menu_text()];
                }
                let Ok(slot) = choice.parse::<u8>() else {
                    return vec!["Enter a slot number, or 'back'.".to_string()];
                };
                self.machine.change_state(AdventureState::Loading);
                match self.saves.load(slot) {
                    Ok(data) => {
                        self.apply_save(data);
                        self.menu_mode = MenuMode::Root;
                        self.machine.change_state(AdventureState::Playing);
                        vec![format!("Game loaded from slot {}.", slot)]
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        self.menu_mode = MenuMode::Root;
                        self.machine.change_state(AdventureState::Menu);
                        vec![format!("No saved game found in slot {}.", slot)]
                    }
                    // Corrupt save: fall back to a fresh game
                    Err(_) => {
                        self.menu_mode = MenuMode::AwaitingName;
                        self.machine.change_state(AdventureState::Menu);
                        vec![
                            format!("The save in slot {} could not be read.", slot),
                            "Starting a fresh game instead. What is your name, adventurer?"
                                .to_string(),
                        ]
                    }
                }
            }
        }
    }

    fn start_new_game(&mut self, name: &str) -> Vec<String> {
        self.player = Player::new(name.to_string(), world::STARTING_ROOM);
        self.rooms = world::build_rooms();
        self.menu_mode = MenuMode::Root;
        self.machine.change_state(AdventureState::Playing);
        vec![world::welcome_message(name)]
    }

    fn handle_play_line(&mut self, line: &str) -> Vec<String> {
        let expanded = commands::expand_shortcuts(line);
        if expanded.is_empty() {
            return Vec::new();
        }

        let command = match commands::parse(&expanded) {
            Ok(command) => command,
            Err(message) => return vec![message],
        };

        // Saving is a transient phase wrapped around the write itself.
        let is_save = matches!(command, commands::Command::Save(_));
        if is_save {
            self.machine.change_state(AdventureState::Saving);
        }

        let mut ctx = CommandContext {
            player: &mut self.player,
            rooms: &mut self.rooms,
            saves: &self.saves,
        };
        let outcome = commands::execute(command, &mut ctx);

        if is_save {
            self.machine.change_state(AdventureState::Playing);
        }

        let mut out = vec![outcome.message];
        match outcome.action {
            Some(PostAction::Quit) => {
                self.machine.change_state(AdventureState::Quit);
            }
            Some(PostAction::Load(data)) => {
                self.apply_save(*data);
                out.push(self.describe_current_room());
            }
            None => {}
        }

        for name in self.player.update_effects() {
            out.push(format!("The {} effect wears off.", name));
        }

        if !self.player.is_alive {
            out.push("Your strength fails and darkness takes you.".to_string());
            self.menu_mode = MenuMode::Root;
            self.machine.change_state(AdventureState::Menu);
        }

        out
    }

    /// Replace the running game with a restored snapshot.
    fn apply_save(&mut self, data: SaveData) {
        self.player = data.player;
        self.rooms = data.rooms;
        self.player.current_room = data.current_room_id;
    }

    fn describe_current_room(&mut self) -> String {
        let has_light = self.player.has_light_source;
        match self.rooms.get_mut(&self.player.current_room) {
            Some(room) => room.describe(has_light),
            None => "You seem to be nowhere. That can't be right.".to_string(),
        }
    }

    /// Blocking stdin loop. Reads until quit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let stdin = io::stdin();

        for line in self.intro() {
            println!("{}", line);
        }

        let mut input = String::new();
        while self.is_running() {
            print!("> ");
            stdout.lock().flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }

            for line in self.handle_line(input.trim()) {
                println!("{}", line);
            }
            println!();
        }
        Ok(())
    }
}

fn menu_text() -> String {
    [
        "",
        "--- Main Menu ---",
        "  1. New Game",
        "  2. Load Game",
        "  3. Help",
        "  4. Quit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game(name: &str) -> Game {
        let dir = std::env::temp_dir().join(format!("parlor_game_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Game::with_save_manager(SaveManager::with_dir(dir))
    }

    fn start(game: &mut Game, name: &str) {
        game.handle_line("1");
        game.handle_line(name);
        assert_eq!(game.state(), AdventureState::Playing);
    }

    #[test]
    fn test_menu_starts_new_game() {
        let mut game = test_game("new_game");
        assert_eq!(game.state(), AdventureState::Menu);

        let out = game.handle_line("1");
        assert!(out[0].contains("name"));
        assert_eq!(game.state(), AdventureState::Menu);

        let out = game.handle_line("Frodo");
        assert_eq!(game.state(), AdventureState::Playing);
        assert!(out.iter().any(|l| l.contains("Frodo")));
        // Entering play describes the starting room
        assert!(out.iter().any(|l| l.contains("Starting Chamber")));
    }

    #[test]
    fn test_menu_rejects_bad_choice() {
        let mut game = test_game("bad_choice");
        let out = game.handle_line("7");
        assert!(out[0].contains("1 to 4"));
        assert_eq!(game.state(), AdventureState::Menu);
    }

    #[test]
    fn test_quit_from_menu_and_game() {
        let mut game = test_game("quit_menu");
        game.handle_line("4");
        assert_eq!(game.state(), AdventureState::Quit);
        assert!(!game.is_running());

        let mut game = test_game("quit_playing");
        start(&mut game, "Frodo");
        game.handle_line("quit");
        assert_eq!(game.state(), AdventureState::Quit);
    }

    #[test]
    fn test_shortcut_moves_player() {
        let mut game = test_game("shortcut");
        start(&mut game, "Frodo");
        let out = game.handle_line("n");
        assert!(out[0].contains("Kitchen"));
        assert_eq!(game.player.current_room, "kitchen");
    }

    #[test]
    fn test_save_and_load_within_session() {
        let mut game = test_game("save_load");
        start(&mut game, "Frodo");
        game.handle_line("n");
        game.handle_line("take key");

        let out = game.handle_line("save 1");
        assert!(out[0].contains("saved to slot 1"));
        assert_eq!(game.state(), AdventureState::Playing);

        // Walk away, then restore
        game.handle_line("s");
        assert_eq!(game.player.current_room, "start_room");
        let out = game.handle_line("load 1");
        assert!(out[0].contains("loaded from slot 1"));
        assert_eq!(game.player.current_room, "kitchen");
        assert!(game.player.has_item("key"));
    }

    #[test]
    fn test_load_from_menu() {
        let mut game = test_game("menu_load");
        start(&mut game, "Frodo");
        game.handle_line("n");
        game.handle_line("save 2");

        let mut fresh = Game::with_save_manager(SaveManager::with_dir(
            std::env::temp_dir().join("parlor_game_test_menu_load"),
        ));
        let out = fresh.handle_line("2");
        assert!(out.iter().any(|l| l.contains("Slot 2")));
        let out = fresh.handle_line("2");
        assert!(out[0].contains("loaded from slot 2"));
        assert_eq!(fresh.state(), AdventureState::Playing);
        assert_eq!(fresh.player.current_room, "kitchen");
    }

    #[test]
    fn test_load_menu_with_no_saves() {
        let mut game = test_game("no_saves");
        let out = game.handle_line("2");
        assert!(out[0].contains("no saved games"));
        assert_eq!(game.state(), AdventureState::Menu);
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut game = test_game("unknown");
        start(&mut game, "Frodo");
        let out = game.handle_line("dance wildly");
        assert!(out[0].contains("don't understand"));
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut game = test_game("empty");
        start(&mut game, "Frodo");
        assert!(game.handle_line("   ").is_empty());
    }
}
