//! The play scene: simulation plus its character-cell renderer.

use super::{centered_rect, FlappyState, SceneEvent};
use crate::flappy::bird::Bird;
use crate::flappy::config::FlappyConfig;
use crate::flappy::pipe::PipeField;
use crossterm::event::KeyCode;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BIRD_CHAR: char = '@';
const PIPE_CHAR: char = '█';
const GROUND_CHAR: char = '=';

pub struct GameScene {
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: u32,
    config: FlappyConfig,
}

impl GameScene {
    pub fn new(config: &FlappyConfig) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: PipeField::new(config),
            score: 0,
            config: config.clone(),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<SceneEvent> {
        match code {
            KeyCode::Char(' ') | KeyCode::Up => {
                self.bird.flap();
                None
            }
            KeyCode::Char('p') | KeyCode::Esc => {
                Some(SceneEvent::ChangeState(FlappyState::Paused))
            }
            _ => None,
        }
    }

    /// Advance one frame. Returns the state to switch to when the run ends.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Option<FlappyState> {
        self.bird.update(dt);
        self.pipes.update(dt, rng);
        self.score += self.pipes.check_scoring(self.bird.x);

        if self.bird.touches_ground() || self.pipes.check_collisions(&self.bird) {
            return Some(FlappyState::GameOver);
        }
        None
    }

    pub fn reset(&mut self) {
        self.bird.reset();
        self.pipes.reset();
        self.score = 0;
    }

    /// Rasterize the world into rows of cells, one char per cell.
    pub fn render_rows(&self) -> Vec<String> {
        let width = self.config.world_width as usize;
        let height = self.config.world_height as usize;
        let mut grid = vec![vec![' '; width]; height];

        for pipe in &self.pipes.pipes {
            let x0 = pipe.x.max(0.0) as usize;
            let x1 = ((pipe.x + pipe.width).max(0.0) as usize).min(width);
            let top = (pipe.top_height().max(0.0) as usize).min(height);
            let bottom = (pipe.bottom_y().max(0.0) as usize).min(height);
            for x in x0..x1 {
                for row in grid.iter_mut().take(top) {
                    row[x] = PIPE_CHAR;
                }
                for row in grid.iter_mut().take(height).skip(bottom) {
                    row[x] = PIPE_CHAR;
                }
            }
        }

        for cell in &mut grid[height - 1] {
            *cell = GROUND_CHAR;
        }

        let bx = (self.bird.x.round() as usize).min(width - 1);
        let by = (self.bird.y.round().max(0.0) as usize).min(height - 1);
        grid[by][bx] = BIRD_CHAR;

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, paused: bool, high_score: u32) {
        frame.render_widget(Clear, area);

        let title = format!(" Flappy   Score: {}   Best: {} ", self.score, high_score);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = self.render_rows().into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if paused {
            let overlay = centered_rect(26, 5, inner);
            frame.render_widget(Clear, overlay);
            let box_widget = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow));
            let overlay_inner = box_widget.inner(overlay);
            frame.render_widget(box_widget, overlay);
            let text = Paragraph::new(vec![
                Line::styled(
                    "PAUSED",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from("p or Esc to resume"),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(text, overlay_inner);
        }
    }
}
