//! Title screen with a two-entry menu.

use super::{centered_rect, FlappyState, SceneEvent};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const ENTRIES: [&str; 2] = ["Start Game", "Quit"];

pub struct MenuScene {
    selected: usize,
}

impl MenuScene {
    pub fn new() -> Self {
        Self { selected: 0 }
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
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected {
                0 => Some(SceneEvent::ChangeState(FlappyState::Playing)),
                _ => Some(SceneEvent::Quit),
            },
            KeyCode::Char('q') | KeyCode::Esc => Some(SceneEvent::Quit),
            _ => None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, high_score: u32) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Flappy ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::styled(
                "F L A P P Y",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!("High score: {}", high_score)),
            Line::from(""),
        ];
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
        lines.push(Line::from("Up/Down to choose, Enter to confirm"));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_rect(inner.width, 12, inner));
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}
