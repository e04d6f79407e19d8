use serde::{Deserialize, Serialize};

/// A single cell of a generated dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Text glyph used when a grid is written out row by row
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_floor_is_walkable() {
        assert!(Tile::Floor.is_walkable());
        assert!(!Tile::Wall.is_walkable());
    }

    #[test]
    fn test_glyphs_match_text_encoding() {
        assert_eq!(Tile::Wall.glyph(), '#');
        assert_eq!(Tile::Floor.glyph(), '.');
        assert_eq!(Tile::from_glyph('.'), Some(Tile::Floor));
        assert_eq!(Tile::from_glyph('x'), None);
    }
}
