//! Terminal setup and the frame loop for the flappy game.

use crate::flappy::config::FlappyConfig;
use crate::flappy::scenes::{self, FlappyState, GameOverScene, GameScene, MenuScene, SceneEvent};
use crate::flappy::score::HighScore;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

/// Frames longer than this are clamped so a stall does not teleport the bird.
const MAX_FRAME_SECS: f32 = 0.1;

pub fn run() -> io::Result<()> {
    let config = FlappyConfig::load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &config);

    // Run every restore step even when the loop or an earlier step failed,
    // so a raw-mode error cannot strand the user on the alternate screen.
    let raw = disable_raw_mode();
    let screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let cursor = terminal.show_cursor();
    result.and(raw).and(screen).and(cursor)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &FlappyConfig,
) -> io::Result<()> {
    let mut machine = scenes::state_machine();
    let mut menu = MenuScene::new();
    let mut game = GameScene::new(config);
    let mut game_over = GameOverScene::new();
    let mut high_score = HighScore::load();
    let mut rng = rand::thread_rng();

    let tick = Duration::from_millis(config.tick_ms);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match machine.current() {
                FlappyState::Menu => menu.draw(frame, area, high_score.best),
                FlappyState::Playing => game.draw(frame, area, false, high_score.best),
                FlappyState::Paused => game.draw(frame, area, true, high_score.best),
                FlappyState::GameOver => game_over.draw(frame, area),
            }
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                let scene_event = match machine.current() {
                    FlappyState::Menu => menu.handle_key(key.code),
                    FlappyState::Playing => game.handle_key(key.code),
                    FlappyState::Paused => paused_key(key.code),
                    FlappyState::GameOver => game_over.handle_key(key.code),
                };
                match scene_event {
                    Some(SceneEvent::Quit) => break,
                    Some(SceneEvent::ChangeState(next)) => {
                        machine.change_state(next);
                    }
                    None => {}
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_SECS);
        last_frame = now;

        if machine.is_in_state(FlappyState::Playing) {
            if let Some(next) = game.update(dt, &mut rng) {
                machine.change_state(next);
            }
        }

        for transition in machine.drain_events() {
            match transition.to {
                // A fresh run, unless we are only resuming from pause
                FlappyState::Playing if transition.from != FlappyState::Paused => {
                    game.reset();
                }
                FlappyState::GameOver => {
                    let new_best = high_score.record(game.score);
                    if new_best {
                        if let Err(e) = high_score.save() {
                            eprintln!("Could not save high score: {}", e);
                        }
                    }
                    game_over.set_result(game.score, high_score.best, new_best);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// The pause overlay accepts resume and back-to-menu only.
fn paused_key(code: KeyCode) -> Option<SceneEvent> {
    match code {
        KeyCode::Char('p') | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(SceneEvent::ChangeState(FlappyState::Playing))
        }
        KeyCode::Char('q') => Some(SceneEvent::ChangeState(FlappyState::Menu)),
        _ => None,
    }
}
