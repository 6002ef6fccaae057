//! Tunable game parameters loaded from `~/.parlor/flappy.json`.

use crate::utils::persistence;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "flappy.json";

/// All gameplay tuning in one serializable struct. Distances are in cells,
/// times in seconds, so speeds are cells per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Downward acceleration in cells per second squared.
    pub gravity: f32,
    /// Velocity set on flap. Negative is up.
    pub jump_velocity: f32,
    pub pipe_speed: f32,
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub pipe_spacing: f32,
    pub bird_x: f32,
    pub bird_radius: f32,
    /// Target frame time in milliseconds.
    pub tick_ms: u64,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            world_width: 60.0,
            world_height: 22.0,
            gravity: 40.0,
            jump_velocity: -13.0,
            pipe_speed: 14.0,
            pipe_gap: 7.0,
            pipe_width: 3.0,
            pipe_spacing: 26.0,
            bird_x: 10.0,
            bird_radius: 0.5,
            tick_ms: 50,
        }
    }
}

impl FlappyConfig {
    /// Reject configs the game cannot run with. Errors name the bad field.
    pub fn validate(&self) -> Result<(), String> {
        if self.world_width < 20.0 || self.world_height < 10.0 {
            return Err("world must be at least 20x10 cells".to_string());
        }
        if self.gravity <= 0.0 {
            return Err("gravity must be positive".to_string());
        }
        if self.jump_velocity >= 0.0 {
            return Err("jump_velocity must be negative (up)".to_string());
        }
        if self.pipe_speed <= 0.0 {
            return Err("pipe_speed must be positive".to_string());
        }
        if self.pipe_gap < 3.0 || self.pipe_gap >= self.world_height {
            return Err("pipe_gap must be at least 3 and fit in the world".to_string());
        }
        if self.pipe_width < 1.0 {
            return Err("pipe_width must be at least 1".to_string());
        }
        if self.pipe_spacing <= self.pipe_width {
            return Err("pipe_spacing must exceed pipe_width".to_string());
        }
        if self.bird_x < 1.0 || self.bird_x >= self.world_width {
            return Err("bird_x must be inside the world".to_string());
        }
        if self.tick_ms == 0 {
            return Err("tick_ms must be positive".to_string());
        }
        Ok(())
    }

    /// Load the config file, writing defaults on first run. Invalid or
    /// unreadable files fall back to defaults without clobbering the file.
    pub fn load() -> Self {
        let path = match persistence::file_path(CONFIG_FILE) {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };
        if !path.exists() {
            let config = Self::default();
            let _ = persistence::save_json(CONFIG_FILE, &config);
            return config;
        }
        let config: Self = persistence::load_json_or_default(CONFIG_FILE);
        if config.validate().is_err() {
            return Self::default();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(FlappyConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut config = FlappyConfig::default();
        config.gravity = 0.0;
        assert!(config.validate().is_err());

        let mut config = FlappyConfig::default();
        config.jump_velocity = 5.0;
        assert!(config.validate().is_err());

        let mut config = FlappyConfig::default();
        config.pipe_gap = config.world_height + 1.0;
        assert!(config.validate().is_err());

        let mut config = FlappyConfig::default();
        config.world_width = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FlappyConfig = serde_json::from_str(r#"{"gravity": 55.0}"#).unwrap();
        assert_eq!(config.gravity, 55.0);
        assert_eq!(config.world_width, FlappyConfig::default().world_width);
    }
}
