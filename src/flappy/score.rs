//! Persistent high score, kept in `~/.parlor/flappy_highscore.json`.

use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;

const SCORE_FILE: &str = "flappy_highscore.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    pub fn load() -> Self {
        persistence::load_json_or_default(SCORE_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(SCORE_FILE, self)
    }

    /// Record a finished run. Returns true when it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }
}
