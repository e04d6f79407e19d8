use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::constants::{PERLIN_MAX_OCTAVES, PERLIN_OCTAVES, PERLIN_SCALE, PERLIN_THRESHOLD};
use crate::error::{check_dimensions, check_probability, DungeonError};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;
use crate::tile::Tile;

/// Caves from thresholded fractal Perlin noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinParams {
    /// Tiles per noise unit; larger values give broader caves
    pub scale: f64,
    pub octaves: usize,
    /// Normalized noise above this value becomes floor
    pub threshold: f64,
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self {
            scale: PERLIN_SCALE,
            octaves: PERLIN_OCTAVES,
            threshold: PERLIN_THRESHOLD,
        }
    }
}

impl PerlinParams {
    fn validate(&self) -> Result<(), DungeonError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(DungeonError::invalid("scale", format!("{} must be positive", self.scale)));
        }
        if self.octaves == 0 || self.octaves > PERLIN_MAX_OCTAVES {
            return Err(DungeonError::invalid(
                "octaves",
                format!("{} is outside 1..={}", self.octaves, PERLIN_MAX_OCTAVES),
            ));
        }
        check_probability("threshold", self.threshold)
    }
}

impl DungeonGenerator for PerlinParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        puffin::profile_function!();
        check_dimensions(width, height)?;
        self.validate()?;

        let fbm = Fbm::<Perlin>::new(fold_seed(seed)).set_octaves(self.octaves);
        let samples: Vec<f64> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| fbm.get([x as f64 / self.scale, y as f64 / self.scale]))
            .collect();

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max > min { max - min } else { 1.0 };

        let mut grid = Grid::new(width, height);
        for (index, value) in samples.iter().enumerate() {
            if (value - min) / range > self.threshold {
                grid.set((index % width) as i32, (index / width) as i32, Tile::Floor);
            }
        }
        grid.wall_border();
        Ok(grid)
    }
}

fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
