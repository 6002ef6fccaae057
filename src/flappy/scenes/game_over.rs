//! End-of-run screen with the final score and replay menu.

use super::{centered_rect, FlappyState, SceneEvent};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const ENTRIES: [&str; 2] = ["Play Again", "Main Menu"];

pub struct GameOverScene {
    selected: usize,
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
}

impl GameOverScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            score: 0,
            best: 0,
            new_best: false,
        }
    }

    /// Record the run that just ended.
    pub fn set_result(&mut self, score: u32, best: u32, new_best: bool) {
        self.score = score;
        self.best = best;
        self.new_best = new_best;
        self.selected = 0;
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<SceneEvent> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                None
            }
            KeyCode::Char('r') => Some(SceneEvent::ChangeState(FlappyState::Playing)),
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected {
                0 => Some(SceneEvent::ChangeState(FlappyState::Playing)),
                _ => Some(SceneEvent::ChangeState(FlappyState::Menu)),
            },
            KeyCode::Char('q') | KeyCode::Esc => Some(SceneEvent::Quit),
            _ => None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!("Score: {}", self.score)),
        ];
        if self.new_best {
            lines.push(Line::styled(
                format!("New best: {}!", self.best),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            lines.push(Line::from(format!("Best: {}", self.best)));
        }
        lines.push(Line::from(""));
        for (i, entry) in ENTRIES.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::styled(format!("  {}  ", entry), style));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("r to restart, q to quit"));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_rect(inner.width, 13, inner));
    }
}

impl Default for GameOverScene {
    fn default() -> Self {
        Self::new()
    }
}
