use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CELLULAR_BIRTH_LIMIT, CELLULAR_DEATH_LIMIT, CELLULAR_ITERATIONS, CELLULAR_WALL_PROBABILITY,
};
use crate::error::{check_dimensions, check_probability, DungeonError};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;
use crate::tile::Tile;

/// Cave generation by repeated smoothing of random noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularParams {
    /// Chance that a cell starts as wall
    pub wall_probability: f64,
    pub iterations: u32,
    /// A floor cell turns to wall with more than this many wall neighbours
    pub birth_limit: u32,
    /// A wall cell survives with at least this many wall neighbours
    pub death_limit: u32,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            wall_probability: CELLULAR_WALL_PROBABILITY,
            iterations: CELLULAR_ITERATIONS,
            birth_limit: CELLULAR_BIRTH_LIMIT,
            death_limit: CELLULAR_DEATH_LIMIT,
        }
    }
}

impl DungeonGenerator for CellularParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        puffin::profile_function!();
        check_dimensions(width, height)?;
        check_probability("wall_probability", self.wall_probability)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if !rng.gen_bool(self.wall_probability) {
                    grid.set(x, y, Tile::Floor);
                }
            }
        }

        for _ in 0..self.iterations {
            grid = self.step(&grid);
        }
        grid.wall_border();
        Ok(grid)
    }
}

impl CellularParams {
    /// Apply one synchronous automaton step.
    pub fn step(&self, grid: &Grid) -> Grid {
        let mut next = Grid::new(grid.width(), grid.height());
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let walls = wall_neighbors(grid, x, y);
                let wall = if grid.is_floor(x, y) {
                    walls > self.birth_limit
                } else {
                    walls >= self.death_limit
                };
                if !wall {
                    next.set(x, y, Tile::Floor);
                }
            }
        }
        next
    }
}

/// Walls among the eight neighbours. Cells past the edge count as walls.
fn wall_neighbors(grid: &Grid, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) != (0, 0) && !grid.is_floor(x + dx, y + dy) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_cells_see_outside_as_wall() {
        let grid = Grid::from_rows(&["...", "...", "..."]).unwrap();
        assert_eq!(wall_neighbors(&grid, 0, 0), 5);
        assert_eq!(wall_neighbors(&grid, 1, 1), 0);
    }

    #[test]
    fn test_isolated_wall_dies() {
        let grid = Grid::from_rows(&[".....", ".....", "..#..", ".....", "....."]).unwrap();
        let next = CellularParams::default().step(&grid);
        assert!(next.is_floor(2, 2));
    }

    #[test]
    fn test_crowded_floor_becomes_wall() {
        let grid = Grid::from_rows(&["###", "#.#", "###"]).unwrap();
        let next = CellularParams::default().step(&grid);
        assert_eq!(next.floor_count(), 0);
    }

    #[test]
    fn test_border_is_wall() {
        let grid = CellularParams::default().generate(40, 25, 7).unwrap();
        for x in 0..40 {
            assert!(!grid.is_floor(x, 0));
            assert!(!grid.is_floor(x, 24));
        }
        for y in 0..25 {
            assert!(!grid.is_floor(0, y));
            assert!(!grid.is_floor(39, y));
        }
        assert!(grid.floor_count() > 0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let params = CellularParams {
            wall_probability: 2.0,
            ..Default::default()
        };
        assert!(params.generate(10, 10, 0).is_err());
    }
}
