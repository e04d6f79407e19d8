//! Procedural dungeon layouts on a wall/floor tile grid.
//!
//! The main generator is a binary space partition with guaranteed
//! connectivity ([`generate`]). Cave, walk, tunnel and pattern generators sit
//! beside it behind the same [`DungeonGenerator`] trait.

pub mod bsp;
pub mod config;
pub mod constants;
pub mod error;
pub mod flood;
pub mod geometry;
pub mod grid;
pub mod strategies;
pub mod tile;

pub use bsp::{generate, generate_layout, BspLayout, BspParams};
pub use config::DungeonConfig;
pub use error::DungeonError;
pub use geometry::{Corridor, Point, Rect};
pub use grid::Grid;
pub use strategies::{DungeonGenerator, Strategy};
pub use tile::Tile;
