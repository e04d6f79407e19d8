use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::DRUNKARD_FLOOR_RATIO;
use crate::error::{check_dimensions, check_probability, DungeonError};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;
use crate::tile::Tile;

const STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A single random walker carving floor until enough of the map is open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrunkardParams {
    /// Fraction of the whole map to turn into floor
    pub floor_ratio: f64,
}

impl Default for DrunkardParams {
    fn default() -> Self {
        Self {
            floor_ratio: DRUNKARD_FLOOR_RATIO,
        }
    }
}

impl DungeonGenerator for DrunkardParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        puffin::profile_function!();
        check_dimensions(width, height)?;
        check_probability("floor_ratio", self.floor_ratio)?;

        let mut grid = Grid::new(width, height);
        if width < 3 || height < 3 {
            return Ok(grid);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (w, h) = (width as i32, height as i32);

        let interior = (width - 2) * (height - 2);
        let target = ((width * height) as f64 * self.floor_ratio) as usize;
        let target = target.clamp(1, interior);

        let mut x = rng.gen_range(1..=w - 2);
        let mut y = rng.gen_range(1..=h - 2);
        grid.set(x, y, Tile::Floor);
        let mut carved = 1;

        while carved < target {
            let Some(&(dx, dy)) = STEPS.choose(&mut rng) else {
                break;
            };
            x = (x + dx).clamp(1, w - 2);
            y = (y + dy).clamp(1, h - 2);
            if !grid.is_floor(x, y) {
                grid.set(x, y, Tile::Floor);
                carved += 1;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::is_connected;

    #[test]
    fn test_reaches_target_ratio() {
        let grid = DrunkardParams::default().generate(60, 30, 5).unwrap();
        assert_eq!(grid.floor_count(), (60.0 * 30.0 * DRUNKARD_FLOOR_RATIO) as usize);
    }

    #[test]
    fn test_walk_is_one_region_inside_border() {
        let grid = DrunkardParams::default().generate(40, 20, 12).unwrap();
        assert!(is_connected(&grid));
        for x in 0..40 {
            assert!(!grid.is_floor(x, 0));
            assert!(!grid.is_floor(x, 19));
        }
    }

    #[test]
    fn test_ratio_is_capped_by_interior() {
        let params = DrunkardParams { floor_ratio: 1.0 };
        let grid = params.generate(6, 5, 3).unwrap();
        assert_eq!(grid.floor_count(), 4 * 3);
    }

    #[test]
    fn test_tiny_map_stays_walled() {
        let grid = DrunkardParams::default().generate(2, 8, 3).unwrap();
        assert_eq!(grid.floor_count(), 0);
    }
}
