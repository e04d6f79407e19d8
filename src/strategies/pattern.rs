use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::bsp::Elbow;
use crate::constants::{PATTERN_ROOM_ATTEMPTS, PATTERN_ROOM_MAX_SIZE, PATTERN_ROOM_MIN_SIZE};
use crate::error::{check_dimensions, DungeonError};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;

/// Simplified pattern collapse: scatter non-overlapping rooms, then chain
/// them in a shuffled order with narrow L-shaped corridors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParams {
    pub room_attempts: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            room_attempts: PATTERN_ROOM_ATTEMPTS,
            room_min_size: PATTERN_ROOM_MIN_SIZE,
            room_max_size: PATTERN_ROOM_MAX_SIZE,
        }
    }
}

impl PatternParams {
    fn validate(&self) -> Result<(), DungeonError> {
        if self.room_min_size < 1 {
            return Err(DungeonError::invalid("room_min_size", "must be at least 1"));
        }
        if self.room_max_size < self.room_min_size {
            return Err(DungeonError::invalid(
                "room_max_size",
                format!("{} is below room_min_size {}", self.room_max_size, self.room_min_size),
            ));
        }
        Ok(())
    }
}

impl DungeonGenerator for PatternParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        puffin::profile_function!();
        check_dimensions(width, height)?;
        self.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        let (w, h) = (width as i32, height as i32);

        let mut centers = Vec::new();
        for _ in 0..self.room_attempts {
            let room_w = rng.gen_range(self.room_min_size..=self.room_max_size);
            let room_h = rng.gen_range(self.room_min_size..=self.room_max_size);
            // Leave a wall on every side, skip attempts that cannot fit
            if room_w > w - 2 || room_h > h - 2 {
                continue;
            }
            let x = rng.gen_range(1..=w - room_w - 1);
            let y = rng.gen_range(1..=h - room_h - 1);
            let room = Rect::new(x, y, room_w, room_h);
            if touches_floor(&grid, &room) {
                continue;
            }
            grid.carve_rect(&room);
            centers.push(room.center());
        }

        centers.shuffle(&mut rng);
        for pair in centers.windows(2) {
            connect(&mut grid, pair[0], pair[1], Elbow::random(&mut rng));
        }
        Ok(grid)
    }
}

fn touches_floor(grid: &Grid, room: &Rect) -> bool {
    (room.y..room.bottom()).any(|y| (room.x..room.right()).any(|x| grid.is_floor(x, y)))
}

fn connect(grid: &mut Grid, a: Point, b: Point, elbow: Elbow) {
    match elbow {
        Elbow::HorizontalFirst => {
            grid.carve_h_line(a.x, b.x, a.y);
            grid.carve_v_line(a.y, b.y, b.x);
        }
        Elbow::VerticalFirst => {
            grid.carve_v_line(a.y, b.y, a.x);
            grid.carve_h_line(a.x, b.x, b.y);
        }
    }
}
