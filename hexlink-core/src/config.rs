//! GameConfig - board and opponent settings

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_DEPTH;
use crate::board::{BoardSize, Player};
use crate::error::GameError;
use crate::obstacles::{obstacle_count, MAX_OBSTACLES, OBSTACLE_DENSITY};

/// Largest supported board side
pub const MAX_BOARD_DIM: usize = 64;

/// Settings for a game, loadable from JSON. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Upper bound on obstacles regardless of board size
    pub max_obstacles: usize,
    /// Share of cells turned into obstacles before the cap
    pub obstacle_density: f64,
    /// Side played by the AI; `None` for two human players
    pub ai_player: Option<Player>,
    pub ai_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            max_obstacles: MAX_OBSTACLES,
            obstacle_density: OBSTACLE_DENSITY,
            ai_player: Some(Player::Second),
            ai_depth: DEFAULT_DEPTH,
        }
    }
}

impl GameConfig {
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Config with obstacles turned off
    pub fn without_obstacles(mut self) -> Self {
        self.max_obstacles = 0;
        self
    }

    pub fn board_size(&self) -> BoardSize {
        BoardSize::new(self.rows, self.cols)
    }

    /// Obstacles drawn for each new game
    pub fn obstacle_count(&self) -> usize {
        obstacle_count(self.board_size(), self.max_obstacles, self.obstacle_density)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(GameError::InvalidConfig(format!(
                "board must be at least 2x2, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_BOARD_DIM || self.cols > MAX_BOARD_DIM {
            return Err(GameError::InvalidConfig(format!(
                "board must be at most {MAX_BOARD_DIM}x{MAX_BOARD_DIM}, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.obstacle_density) {
            return Err(GameError::InvalidConfig(format!(
                "obstacle density {} outside 0..=1",
                self.obstacle_density
            )));
        }
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
