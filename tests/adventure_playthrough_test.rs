//! Integration test: complete adventure sessions driven line by line.
//!
//! Sessions go through the real menu, command dispatch, and save layer,
//! using a temporary save directory per test.

use parlor::adventure::save::SaveManager;
use parlor::adventure::{AdventureState, Game};
use std::path::PathBuf;

fn save_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("parlor_integration_{}", tag));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn new_game(tag: &str) -> Game {
    Game::with_save_manager(SaveManager::with_dir(save_dir(tag)))
}

/// Run a batch of input lines, returning everything printed.
fn play(game: &mut Game, lines: &[&str]) -> Vec<String> {
    let mut output = Vec::new();
    for line in lines {
        output.extend(game.handle_line(line));
    }
    output
}

fn output_contains(output: &[String], needle: &str) -> bool {
    output.iter().any(|l| l.contains(needle))
}

#[test]
fn test_full_playthrough_to_the_study() {
    let mut game = new_game("full_playthrough");
    play(&mut game, &["1", "Explorer"]);
    assert_eq!(game.state(), AdventureState::Playing);

    // Gear up in the starting chamber and kitchen
    let output = play(&mut game, &["take lamp", "use lamp", "n", "take key"]);
    assert!(output_contains(&output, "pick up the"));
    assert!(output_contains(&output, "Ancient Kitchen"));

    // The lamp lights the pantry on entry
    let output = play(&mut game, &["w"]);
    assert!(output_contains(&output, "pushes back the darkness"));
    assert!(output_contains(&output, "Storage Pantry"));

    // Cross to the library and unlock the study with the key
    let output = play(&mut game, &["e", "s", "e", "n"]);
    assert!(output_contains(&output, "Forgotten Library"));
    assert!(output_contains(&output, "click"));
    assert!(output_contains(&output, "Scholar's Study"));

    // Claim the sword
    let output = play(&mut game, &["take sword", "inventory"]);
    assert!(output_contains(&output, "sword"));
}

#[test]
fn test_dark_pantry_blocks_until_lit() {
    let mut game = new_game("dark_pantry");
    play(&mut game, &["1", "Explorer"]);

    // Without a light the pantry is unreadable
    let output = play(&mut game, &["n", "w"]);
    assert!(output_contains(&output, "too dark"));

    // Fetch the lamp and come back
    let output = play(&mut game, &["e", "s", "take lamp", "use lamp", "n", "w"]);
    assert!(output_contains(&output, "pushes back the darkness"));
    assert!(output_contains(&output, "Storage Pantry"));
}

#[test]
fn test_locked_study_without_key() {
    let mut game = new_game("locked_study");
    play(&mut game, &["1", "Explorer"]);

    let output = play(&mut game, &["e", "n"]);
    assert!(output_contains(&output, "locked"));
    assert!(output_contains(&output, "key"));
}

#[test]
fn test_save_survives_across_sessions() {
    let dir = save_dir("cross_session");

    let mut game = Game::with_save_manager(SaveManager::with_dir(dir.clone()));
    play(&mut game, &["1", "Keeper"]);
    let output = play(&mut game, &["n", "take key", "save 3"]);
    assert!(output_contains(&output, "saved to slot 3"));

    // A brand new session loads the same slot from the menu
    let mut fresh = Game::with_save_manager(SaveManager::with_dir(dir));
    let output = play(&mut fresh, &["2"]);
    assert!(output_contains(&output, "Slot 3"));
    assert!(output_contains(&output, "Keeper"));

    let output = play(&mut fresh, &["3"]);
    assert!(output_contains(&output, "loaded from slot 3"));
    assert_eq!(fresh.state(), AdventureState::Playing);
    assert!(output_contains(&output, "Ancient Kitchen"));

    // The restored player still carries the key
    let output = play(&mut fresh, &["inventory"]);
    assert!(output_contains(&output, "key"));
}

#[test]
fn test_corrupted_save_reported_in_menu() {
    let dir = save_dir("corrupted_menu");
    std::fs::write(dir.join("save_slot_1.json"), "definitely not json").unwrap();

    let mut game = Game::with_save_manager(SaveManager::with_dir(dir));
    let output = play(&mut game, &["2"]);
    assert!(output_contains(&output, "[corrupted]"));

    // Trying to load it falls back to a fresh game
    let output = play(&mut game, &["1"]);
    assert!(output_contains(&output, "could not be read"));
    assert!(output_contains(&output, "fresh game"));
    assert_eq!(game.state(), AdventureState::Menu);

    let output = play(&mut game, &["Phoenix"]);
    assert_eq!(game.state(), AdventureState::Playing);
    assert!(output_contains(&output, "Phoenix"));
}

#[test]
fn test_quit_ends_the_session() {
    let mut game = new_game("quit");
    play(&mut game, &["1", "Explorer"]);
    let output = play(&mut game, &["quit"]);
    assert!(output_contains(&output, "Thanks for playing"));
    assert!(!game.is_running());
}

#[test]
fn test_help_available_in_menu_and_game() {
    let mut game = new_game("help");
    let output = play(&mut game, &["3"]);
    assert!(output_contains(&output, "go <direction>"));

    play(&mut game, &["1", "Explorer"]);
    let output = play(&mut game, &["help"]);
    assert!(output_contains(&output, "go <direction>"));
}

#[test]
fn test_shortcuts_and_errors() {
    let mut game = new_game("shortcuts");
    play(&mut game, &["1", "Explorer"]);

    let output = play(&mut game, &["x"]);
    assert!(output_contains(&output, "don't understand"));

    let output = play(&mut game, &["go nowhere"]);
    assert!(output_contains(&output, "not a valid direction"));

    // 'i' expands to inventory
    let output = play(&mut game, &["i"]);
    assert!(output_contains(&output, "inventory is empty"));
}
