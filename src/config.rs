use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DUNGEON_DEFAULT_HEIGHT, DUNGEON_DEFAULT_SEED, DUNGEON_DEFAULT_WIDTH};
use crate::error::{check_dimensions, DungeonError};
use crate::grid::Grid;
use crate::strategies::{DungeonGenerator, Strategy};

/// A complete generation request: map size, seed and algorithm.
///
/// ```json
/// { "width": 80, "height": 30, "seed": 42,
///   "strategy": { "algorithm": "bsp", "max_depth": 4 } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub strategy: Strategy,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            seed: DUNGEON_DEFAULT_SEED,
            strategy: Strategy::default(),
        }
    }
}

impl DungeonConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DungeonError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DungeonError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check map dimensions. Strategy parameters are checked by the strategy
    /// itself when it runs.
    pub fn validate(&self) -> Result<(), DungeonError> {
        check_dimensions(self.width, self.height)
    }

    pub fn generate(&self) -> Result<Grid, DungeonError> {
        self.strategy.generate(self.width, self.height, self.seed)
    }
}
