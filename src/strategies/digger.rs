use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DIGGER_COUNT, DIGGER_LENGTH, DIGGER_ROOM_CHANCE, DIGGER_ROOM_MAX, DIGGER_ROOM_MIN,
    DIGGER_START_ROOM, DIGGER_TURN_CHANCE,
};
use crate::error::{check_dimensions, DungeonError};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;
use crate::tile::Tile;

const HEADINGS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Tunnels dug outward from a central room by several independent agents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiggerParams {
    /// Number of diggers, at most one per side of the start room
    pub diggers: u32,
    /// Steps each digger takes
    pub dig_length: u32,
}

impl Default for DiggerParams {
    fn default() -> Self {
        Self {
            diggers: DIGGER_COUNT,
            dig_length: DIGGER_LENGTH,
        }
    }
}

impl DungeonGenerator for DiggerParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        puffin::profile_function!();
        check_dimensions(width, height)?;

        let mut grid = Grid::new(width, height);
        if width < 3 || height < 3 {
            return Ok(grid);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (w, h) = (width as i32, height as i32);
        let interior = Rect::new(1, 1, w - 2, h - 2);

        let center = Point::new(w / 2, h / 2);
        let half = DIGGER_START_ROOM / 2;
        let start_room = Rect::new(
            center.x - half,
            center.y - half,
            DIGGER_START_ROOM,
            DIGGER_START_ROOM,
        );
        carve_clipped(&mut grid, &start_room, &interior);

        let mut starts = vec![
            Point::new(center.x, center.y - half),
            Point::new(center.x + half, center.y),
            Point::new(center.x, center.y + half),
            Point::new(center.x - half, center.y),
        ];
        starts.shuffle(&mut rng);
        starts.truncate(self.diggers as usize);

        for start in starts {
            self.dig(&mut grid, start, &interior, &mut rng);
        }
        Ok(grid)
    }
}

impl DiggerParams {
    fn dig(&self, grid: &mut Grid, start: Point, interior: &Rect, rng: &mut impl Rng) {
        let mut pos = start;
        let mut heading = HEADINGS[rng.gen_range(0..HEADINGS.len())];

        for _ in 0..self.dig_length {
            if rng.gen_bool(DIGGER_TURN_CHANCE) {
                let reverse = (-heading.0, -heading.1);
                let options: Vec<(i32, i32)> =
                    HEADINGS.iter().copied().filter(|h| *h != reverse).collect();
                heading = options[rng.gen_range(0..options.len())];
            }

            pos.x = (pos.x + heading.0).clamp(interior.x, interior.right() - 1);
            pos.y = (pos.y + heading.1).clamp(interior.y, interior.bottom() - 1);
            grid.set(pos.x, pos.y, Tile::Floor);

            if rng.gen_bool(DIGGER_ROOM_CHANCE) {
                let size = rng.gen_range(DIGGER_ROOM_MIN..=DIGGER_ROOM_MAX);
                let half = size / 2;
                let room = Rect::new(pos.x - half, pos.y - half, 2 * half + 1, 2 * half + 1);
                carve_clipped(grid, &room, interior);
            }
        }
    }
}

/// Carve the part of `room` that lies inside `interior`.
fn carve_clipped(grid: &mut Grid, room: &Rect, interior: &Rect) {
    for y in room.y..room.bottom() {
        for x in room.x..room.right() {
            if interior.contains(x, y) {
                grid.set(x, y, Tile::Floor);
            }
        }
    }
}
