use rand::Rng;

use crate::constants::{MIN_ROOM_LEAF, ROOM_MARGIN, ROOM_MAX_TENTHS, ROOM_MIN_TENTHS};
use crate::geometry::Rect;

/// Create a room within a leaf region, with a margin on every side.
/// Returns `None` when the leaf is too thin to hold any room.
pub fn place_room(leaf: &Rect, rng: &mut impl Rng) -> Option<Rect> {
    if leaf.width < MIN_ROOM_LEAF || leaf.height < MIN_ROOM_LEAF {
        return None;
    }

    let room_width = room_extent(leaf.width, rng);
    let room_height = room_extent(leaf.height, rng);

    let room_x = leaf.x + span(ROOM_MARGIN, leaf.width - room_width - ROOM_MARGIN, rng);
    let room_y = leaf.y + span(ROOM_MARGIN, leaf.height - room_height - ROOM_MARGIN, rng);

    Some(Rect::new(room_x, room_y, room_width, room_height))
}

/// Between half and seventy percent of the leaf, never eating into the margins.
fn room_extent(len: i32, rng: &mut impl Rng) -> i32 {
    let low = (len as i64 * ROOM_MIN_TENTHS as i64 / 10) as i32;
    let high = (len as i64 * ROOM_MAX_TENTHS as i64 / 10) as i32;
    span(low, high, rng).clamp(1, len - 2 * ROOM_MARGIN)
}

/// Uniform draw from `[low, high]`, collapsing to `low` when the range is empty.
fn span(low: i32, high: i32, rng: &mut impl Rng) -> i32 {
    if high <= low {
        return low;
    }
    rng.gen_range(low..=high)
}
