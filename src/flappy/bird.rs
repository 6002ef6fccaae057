//! Bird physics: gravity integration, flapping, and bounds checks.

use crate::flappy::config::FlappyConfig;

#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub radius: f32,
    gravity: f32,
    jump_velocity: f32,
    world_height: f32,
    start_y: f32,
}

impl Bird {
    pub fn new(config: &FlappyConfig) -> Self {
        let start_y = config.world_height / 2.0;
        Self {
            x: config.bird_x,
            y: start_y,
            velocity: 0.0,
            radius: config.bird_radius,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            world_height: config.world_height,
            start_y,
        }
    }

    /// Integrate one frame. Velocity first, then position, so a flap on the
    /// same frame takes effect immediately.
    pub fn update(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.y += self.velocity * dt;

        // The ceiling stops the bird instead of killing it.
        if self.y < self.radius {
            self.y = self.radius;
            self.velocity = 0.0;
        }
    }

    pub fn flap(&mut self) {
        self.velocity = self.jump_velocity;
    }

    /// The ground is the last world row.
    pub fn touches_ground(&self) -> bool {
        self.y + self.radius >= self.world_height - 1.0
    }

    pub fn reset(&mut self) {
        self.y = self.start_y;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bird() -> Bird {
        Bird::new(&FlappyConfig::default())
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let mut bird = test_bird();
        let start_y = bird.y;
        bird.update(0.05);
        let first_fall = bird.y - start_y;
        bird.update(0.05);
        let second_fall = bird.y - start_y - first_fall;
        assert!(first_fall > 0.0);
        assert!(second_fall > first_fall);
    }

    #[test]
    fn test_velocity_integration_is_linear_in_dt() {
        let config = FlappyConfig::default();
        let mut bird = Bird::new(&config);
        bird.update(0.1);
        assert!((bird.velocity - config.gravity * 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_flap_sets_upward_velocity() {
        let config = FlappyConfig::default();
        let mut bird = Bird::new(&config);
        bird.update(0.5);
        bird.flap();
        assert_eq!(bird.velocity, config.jump_velocity);
        let before = bird.y;
        bird.update(0.05);
        assert!(bird.y < before);
    }

    #[test]
    fn test_ceiling_stops_bird() {
        let mut bird = test_bird();
        for _ in 0..100 {
            bird.flap();
            bird.update(0.05);
        }
        assert!(bird.y >= bird.radius);
        assert!(!bird.touches_ground());
    }

    #[test]
    fn test_falls_to_ground_without_flapping() {
        let mut bird = test_bird();
        for _ in 0..200 {
            bird.update(0.05);
            if bird.touches_ground() {
                return;
            }
        }
        panic!("bird never reached the ground");
    }

    #[test]
    fn test_reset_restores_start() {
        let mut bird = test_bird();
        let start_y = bird.y;
        bird.update(0.5);
        bird.flap();
        bird.reset();
        assert_eq!(bird.y, start_y);
        assert_eq!(bird.velocity, 0.0);
    }
}
