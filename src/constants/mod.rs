//! Generation constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod dungeon;
mod strategies;

pub use dungeon::*;
pub use strategies::*;
