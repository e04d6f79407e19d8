//! BSP dungeon generation constants.

/// Minimum width and height a region needs before it may be split
pub const SPLIT_THRESHOLD: i32 = 15;
/// Smallest leaf dimension that still fits a room with margins
pub const MIN_ROOM_LEAF: i32 = 3;
/// Margin around rooms within their leaf
pub const ROOM_MARGIN: i32 = 1;
/// Room size bounds as fractions of the leaf, in tenths
pub const ROOM_MIN_TENTHS: i32 = 5;
pub const ROOM_MAX_TENTHS: i32 = 7;
/// Tiles carved on each side of a corridor's centre line
pub const CORRIDOR_HALF_WIDTH: i32 = 1;
/// Deepest partition tree `generate` accepts
pub const MAX_TREE_DEPTH: u32 = 16;
/// Largest grid, in cells, any generator will allocate
pub const MAX_GRID_CELLS: usize = 1 << 28;
/// Default dungeon width
pub const DUNGEON_DEFAULT_WIDTH: usize = 80;
/// Default dungeon height
pub const DUNGEON_DEFAULT_HEIGHT: usize = 30;
/// Default partition depth
pub const DUNGEON_DEFAULT_DEPTH: u32 = 4;
/// Default seed used by the CLI when no config is given
pub const DUNGEON_DEFAULT_SEED: u64 = 42;
