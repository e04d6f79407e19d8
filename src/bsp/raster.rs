use crate::constants::CORRIDOR_HALF_WIDTH;
use crate::geometry::{Corridor, Point, Rect};
use crate::grid::Grid;
use crate::tile::Tile;

/// Carve rooms and corridors into a fresh wall-filled grid.
pub fn rasterize(width: usize, height: usize, rooms: &[Rect], corridors: &[Corridor]) -> Grid {
    let mut grid = Grid::new(width, height);
    for room in rooms {
        grid.carve_rect(room);
    }
    for corridor in corridors {
        carve_corridor(&mut grid, corridor);
    }
    grid
}

/// Carve one straight segment, three tiles wide. Endpoints are clamped into
/// the grid first; a segment that is neither horizontal nor vertical after
/// clamping is ignored.
pub fn carve_corridor(grid: &mut Grid, corridor: &Corridor) {
    // Only reachable by calling this directly; generators reject empty grids.
    if grid.width() == 0 || grid.height() == 0 {
        return;
    }
    let from = clamp_point(grid, corridor.from);
    let to = clamp_point(grid, corridor.to);

    if from.x == to.x {
        for y in from.y.min(to.y)..=from.y.max(to.y) {
            for w in -CORRIDOR_HALF_WIDTH..=CORRIDOR_HALF_WIDTH {
                grid.set(from.x + w, y, Tile::Floor);
            }
        }
    } else if from.y == to.y {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for w in -CORRIDOR_HALF_WIDTH..=CORRIDOR_HALF_WIDTH {
                grid.set(x, from.y + w, Tile::Floor);
            }
        }
    }
}

fn clamp_point(grid: &Grid, p: Point) -> Point {
    Point::new(
        p.x.clamp(0, grid.width() as i32 - 1),
        p.y.clamp(0, grid.height() as i32 - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_become_floor() {
        let grid = rasterize(10, 8, &[Rect::new(1, 1, 3, 2)], &[]);
        assert_eq!(grid.floor_count(), 6);
        assert!(grid.is_floor(3, 2));
        assert!(!grid.is_floor(4, 2));
    }

    #[test]
    fn test_horizontal_corridor_is_three_wide() {
        let corridor = Corridor::new(Point::new(2, 4), Point::new(6, 4));
        let grid = rasterize(10, 10, &[], &[corridor]);
        assert_eq!(grid.floor_count(), 5 * 3);
        for x in 2..=6 {
            for y in 3..=5 {
                assert!(grid.is_floor(x, y));
            }
        }
    }

    #[test]
    fn test_vertical_corridor_is_three_wide() {
        let corridor = Corridor::new(Point::new(5, 7), Point::new(5, 1));
        let grid = rasterize(10, 10, &[], &[corridor]);
        assert_eq!(grid.floor_count(), 7 * 3);
        assert!(grid.is_floor(4, 1));
        assert!(grid.is_floor(6, 7));
    }

    #[test]
    fn test_corridor_at_edge_is_clipped() {
        let corridor = Corridor::new(Point::new(0, 0), Point::new(0, 4));
        let grid = rasterize(5, 5, &[], &[corridor]);
        assert_eq!(grid.floor_count(), 5 * 2);
    }

    #[test]
    fn test_out_of_range_endpoints_are_clamped() {
        let corridor = Corridor::new(Point::new(-20, 2), Point::new(50, 2));
        let grid = rasterize(6, 5, &[], &[corridor]);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.floor_count(), 6 * 3);

        let far = Corridor::new(Point::new(100, 100), Point::new(100, 200));
        let grid = rasterize(6, 5, &[], &[far]);
        assert!(grid.is_floor(5, 4));
        assert_eq!(grid.floor_count(), 2);
    }

    #[test]
    fn test_empty_grid_ignores_corridors() {
        let corridor = Corridor::new(Point::new(0, 0), Point::new(0, 3));
        let grid = rasterize(0, 4, &[], &[corridor]);
        assert!(grid.tiles().is_empty());
        let grid = rasterize(4, 0, &[], &[corridor]);
        assert_eq!(grid.floor_count(), 0);
    }

    #[test]
    fn test_point_segment_carves_a_short_bar() {
        let corridor = Corridor::new(Point::new(3, 3), Point::new(3, 3));
        let grid = rasterize(7, 7, &[], &[corridor]);
        assert_eq!(grid.floor_count(), 3);
    }
}
