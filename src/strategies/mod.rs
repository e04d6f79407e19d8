//! Interchangeable dungeon generators.
//!
//! Every generator turns `(width, height, params, seed)` into a [`Grid`] of
//! walls and floor, so callers can swap algorithms by swapping parameters.

pub mod cellular;
pub mod digger;
pub mod drunkard;
pub mod pattern;
pub mod perlin;

use serde::{Deserialize, Serialize};

use crate::bsp::BspParams;
use crate::error::DungeonError;
use crate::grid::Grid;

pub use cellular::CellularParams;
pub use digger::DiggerParams;
pub use drunkard::DrunkardParams;
pub use pattern::PatternParams;
pub use perlin::PerlinParams;

/// A dungeon generation algorithm. `self` carries the algorithm's parameters.
pub trait DungeonGenerator {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError>;
}

/// One of the available generators together with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Strategy {
    Bsp(BspParams),
    Cellular(CellularParams),
    Drunkard(DrunkardParams),
    Digger(DiggerParams),
    Perlin(PerlinParams),
    Pattern(PatternParams),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Bsp(BspParams::default())
    }
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bsp(_) => "bsp",
            Strategy::Cellular(_) => "cellular",
            Strategy::Drunkard(_) => "drunkard",
            Strategy::Digger(_) => "digger",
            Strategy::Perlin(_) => "perlin",
            Strategy::Pattern(_) => "pattern",
        }
    }

    fn generator(&self) -> &dyn DungeonGenerator {
        match self {
            Strategy::Bsp(params) => params,
            Strategy::Cellular(params) => params,
            Strategy::Drunkard(params) => params,
            Strategy::Digger(params) => params,
            Strategy::Perlin(params) => params,
            Strategy::Pattern(params) => params,
        }
    }
}

impl DungeonGenerator for Strategy {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        self.generator().generate(width, height, seed)
    }
}
