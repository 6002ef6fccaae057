//! Pipes and the scrolling pipe field.

use crate::flappy::bird::Bird;
use crate::flappy::config::FlappyConfig;
use rand::Rng;

/// Minimum pipes kept on or beyond the right edge of the screen.
const MIN_PIPES: usize = 3;

/// Clearance between a gap edge and the world top or ground.
const GAP_MARGIN: f32 = 2.0;

/// One pipe pair: a column with a vertical gap the bird must pass through.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge, in world cells. Moves left over time.
    pub x: f32,
    pub width: f32,
    pub gap_center: f32,
    pub gap_size: f32,
    pub passed: bool,
}

impl Pipe {
    pub fn top_height(&self) -> f32 {
        self.gap_center - self.gap_size / 2.0
    }

    pub fn bottom_y(&self) -> f32 {
        self.gap_center + self.gap_size / 2.0
    }

    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.x -= speed * dt;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Axis-aligned overlap test against the bird's bounding box.
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let overlaps_x = bird.x + bird.radius > self.x && bird.x - bird.radius < self.x + self.width;
        if !overlaps_x {
            return false;
        }
        bird.y - bird.radius < self.top_height() || bird.y + bird.radius > self.bottom_y()
    }

    /// True exactly once, the first frame the pipe is fully behind the bird.
    pub fn bird_passed(&mut self, bird_x: f32) -> bool {
        if !self.passed && self.x + self.width < bird_x {
            self.passed = true;
            return true;
        }
        false
    }
}

/// The set of live pipes, kept topped up as they scroll off the left edge.
#[derive(Debug, Clone)]
pub struct PipeField {
    pub pipes: Vec<Pipe>,
    speed: f32,
    gap: f32,
    width: f32,
    spacing: f32,
    world_width: f32,
    world_height: f32,
}

impl PipeField {
    pub fn new(config: &FlappyConfig) -> Self {
        Self {
            pipes: Vec::new(),
            speed: config.pipe_speed,
            gap: config.pipe_gap,
            width: config.pipe_width,
            spacing: config.pipe_spacing,
            world_width: config.world_width,
            world_height: config.world_height,
        }
    }

    /// Spawn one pipe past the rightmost pipe, or at the right edge when
    /// the field is empty.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let x = self
            .pipes
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max);
        let x = if x.is_finite() {
            x + self.spacing
        } else {
            self.world_width
        };

        let margin = self.gap / 2.0 + GAP_MARGIN;
        let lo = margin;
        let hi = (self.world_height - 1.0 - margin).max(lo + 0.1);
        let gap_center = rng.gen_range(lo..hi);

        self.pipes.push(Pipe {
            x,
            width: self.width,
            gap_center,
            gap_size: self.gap,
            passed: false,
        });
    }

    /// Scroll all pipes, drop the ones that left the screen, and top the
    /// field back up to the minimum count.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        for pipe in &mut self.pipes {
            pipe.advance(dt, self.speed);
        }
        self.pipes.retain(|p| !p.is_off_screen());
        while self.pipes.len() < MIN_PIPES {
            self.spawn_pipe(rng);
        }
    }

    pub fn check_collisions(&self, bird: &Bird) -> bool {
        self.pipes.iter().any(|p| p.collides_with(bird))
    }

    /// Number of pipes newly passed this frame.
    pub fn check_scoring(&mut self, bird_x: f32) -> u32 {
        self.pipes
            .iter_mut()
            .map(|p| p.bird_passed(bird_x))
            .filter(|&passed| passed)
            .count() as u32
    }

    pub fn reset(&mut self) {
        self.pipes.clear();
    }
}
