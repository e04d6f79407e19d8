//! Defaults for the peer generation strategies.

// Cellular automata
pub const CELLULAR_WALL_PROBABILITY: f64 = 0.45;
pub const CELLULAR_ITERATIONS: u32 = 5;
pub const CELLULAR_BIRTH_LIMIT: u32 = 4;
pub const CELLULAR_DEATH_LIMIT: u32 = 3;

// Drunkard's walk
pub const DRUNKARD_FLOOR_RATIO: f64 = 0.35;

// Digger
pub const DIGGER_COUNT: u32 = 3;
pub const DIGGER_LENGTH: u32 = 100;
/// Side of the central room the diggers start from
pub const DIGGER_START_ROOM: i32 = 5;
/// Chance per step that a digger changes heading
pub const DIGGER_TURN_CHANCE: f64 = 0.3;
/// Chance per step that a digger carves a side room
pub const DIGGER_ROOM_CHANCE: f64 = 0.1;
pub const DIGGER_ROOM_MIN: i32 = 2;
pub const DIGGER_ROOM_MAX: i32 = 4;

// Perlin noise
pub const PERLIN_SCALE: f64 = 15.0;
pub const PERLIN_OCTAVES: usize = 4;
pub const PERLIN_MAX_OCTAVES: usize = 32;
pub const PERLIN_THRESHOLD: f64 = 0.5;

// Simplified pattern collapse
pub const PATTERN_ROOM_ATTEMPTS: u32 = 15;
pub const PATTERN_ROOM_MIN_SIZE: i32 = 5;
pub const PATTERN_ROOM_MAX_SIZE: i32 = 10;
