use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::geometry::Rect;
use crate::tile::Tile;

/// The generated tile buffer. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid filled with walls.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
        }
    }

    /// Build a grid from `#`/`.` rows. Returns `None` for ragged rows or
    /// unknown glyphs.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != width {
                return None;
            }
            for glyph in row.chars() {
                tiles.push(Tile::from_glyph(glyph)?);
            }
        }
        Some(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.get_index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.get_index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set a tile. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.get_index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|t| t.is_walkable())
    }

    pub fn carve_rect(&mut self, rect: &Rect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, Tile::Floor);
            }
        }
    }

    pub fn carve_h_line(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, Tile::Floor);
        }
    }

    pub fn carve_v_line(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, Tile::Floor);
        }
    }

    /// Force the outermost ring of tiles back to wall.
    pub fn wall_border(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.set(x, 0, Tile::Wall);
            self.set(x, h - 1, Tile::Wall);
        }
        for y in 0..h {
            self.set(0, y, Tile::Wall);
            self.set(w - 1, y, Tile::Wall);
        }
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks panics on zero, and a zero-width grid has no rows anyway
        self.tiles.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(Tile::glyph).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("rows", &self.to_rows())?;
        state.end()
    }
}
