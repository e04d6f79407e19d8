use thiserror::Error;

use crate::constants::MAX_GRID_CELLS;

/// Errors surfaced by dungeon generation and configuration loading.
#[derive(Debug, Error)]
pub enum DungeonError {
    /// A parameter is out of range. Raised before any generation work.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to parse dungeon config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read dungeon config: {0}")]
    Io(#[from] std::io::Error),
}

impl DungeonError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DungeonError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject zero sizes, dimensions that do not fit tile coordinates and grids
/// larger than `MAX_GRID_CELLS`.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), DungeonError> {
    for (name, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(DungeonError::invalid(name, "must be at least 1"));
        }
        if value > i32::MAX as usize {
            return Err(DungeonError::invalid(name, format!("{value} exceeds i32::MAX")));
        }
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(DungeonError::invalid(
            "dimensions",
            format!("{width}x{height} exceeds the limit of {MAX_GRID_CELLS} cells"),
        )),
    }
}

pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), DungeonError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DungeonError::invalid(name, format!("{value} is outside [0, 1]")));
    }
    Ok(())
}
