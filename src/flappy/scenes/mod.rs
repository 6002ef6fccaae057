//! Scenes and the scene state machine.
//!
//! Each scene owns its widgets and key handling. The active scene is chosen
//! by a [`StateMachine`] over [`FlappyState`], so illegal jumps (menu
//! straight to paused, for instance) are rejected rather than rendered.

pub mod game;
pub mod game_over;
pub mod menu;

pub use game::GameScene;
pub use game_over::GameOverScene;
pub use menu::MenuScene;

use crate::core::state_machine::StateMachine;
use ratatui::layout::Rect;

/// Which scene is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlappyState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Request a scene raises from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    ChangeState(FlappyState),
    Quit,
}

/// Pause is only reachable from play, and game over only ends a run.
pub fn state_machine() -> StateMachine<FlappyState> {
    use FlappyState::*;
    StateMachine::new(
        Menu,
        vec![
            (Menu, vec![Playing]),
            (Playing, vec![Paused, GameOver]),
            (Paused, vec![Playing, Menu]),
            (GameOver, vec![Playing, Menu]),
        ],
    )
}

/// A centered sub-rectangle, used for overlay boxes.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
