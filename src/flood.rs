use crate::geometry::{Point, Rect};
use crate::grid::Grid;

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Floor tiles reachable from `start` through 4-connected floor.
/// Empty if `start` is not floor.
pub fn flood_fill(grid: &Grid, start: Point) -> Vec<Point> {
    let mut reached = Vec::new();
    if !grid.is_floor(start.x, start.y) {
        return reached;
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let index = |p: Point| p.y as usize * grid.width() + p.x as usize;

    visited[index(start)] = true;
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        reached.push(current);
        for (dx, dy) in NEIGHBORS {
            let next = Point::new(current.x + dx, current.y + dy);
            if !grid.is_floor(next.x, next.y) || visited[index(next)] {
                continue;
            }
            visited[index(next)] = true;
            stack.push(next);
        }
    }
    reached
}

pub fn first_floor(grid: &Grid) -> Option<Point> {
    let index = grid.tiles().iter().position(|t| t.is_walkable())?;
    Some(Point::new(
        (index % grid.width()) as i32,
        (index / grid.width()) as i32,
    ))
}

/// Number of separate 4-connected floor regions.
pub fn floor_components(grid: &Grid) -> usize {
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut components = 0;
    for (index, tile) in grid.tiles().iter().enumerate() {
        if !tile.is_walkable() || seen[index] {
            continue;
        }
        let start = Point::new((index % grid.width()) as i32, (index / grid.width()) as i32);
        for p in flood_fill(grid, start) {
            seen[p.y as usize * grid.width() + p.x as usize] = true;
        }
        components += 1;
    }
    components
}

/// True when all floor tiles form at most one region.
pub fn is_connected(grid: &Grid) -> bool {
    match first_floor(grid) {
        Some(start) => flood_fill(grid, start).len() == grid.floor_count(),
        None => true,
    }
}

/// True when one flood fill covers the footprint of every room.
pub fn rooms_connected(grid: &Grid, rooms: &[Rect]) -> bool {
    let Some(first) = rooms.first() else {
        return true;
    };
    let reached = flood_fill(grid, first.center());
    let mut mask = vec![false; grid.width() * grid.height()];
    for p in &reached {
        mask[p.y as usize * grid.width() + p.x as usize] = true;
    }
    rooms.iter().all(|room| {
        (room.y..room.bottom()).all(|y| {
            (room.x..room.right()).all(|x| {
                grid.in_bounds(x, y) && mask[y as usize * grid.width() + x as usize]
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flood_fill_open_room() {
        let grid = Grid::from_rows(&["#####", "#...#", "#...#", "#####"]).unwrap();
        assert_eq!(flood_fill(&grid, Point::new(2, 1)).len(), 6);
    }

    #[test]
    fn test_flood_fill_from_wall_is_empty() {
        let grid = Grid::from_rows(&["#.", ".."]).unwrap();
        assert!(flood_fill(&grid, Point::new(0, 0)).is_empty());
    }

    #[test]
    fn test_diagonals_do_not_connect() {
        let grid = Grid::from_rows(&[".#", "#."]).unwrap();
        assert!(!is_connected(&grid));
        assert_eq!(floor_components(&grid), 2);
    }

    #[test]
    fn test_walls_split_regions() {
        let grid = Grid::from_rows(&["..#..", "..#..", "....."]).unwrap();
        assert!(is_connected(&grid));
        let grid = Grid::from_rows(&["..#..", "..#..", "..#.."]).unwrap();
        assert!(!is_connected(&grid));
    }

    #[test]
    fn test_all_walls_counts_as_connected() {
        let grid = Grid::new(4, 4);
        assert!(is_connected(&grid));
        assert_eq!(floor_components(&grid), 0);
        assert_eq!(first_floor(&grid), None);
    }

    #[test]
    fn test_rooms_connected() {
        let grid = Grid::from_rows(&["......", "######", "..#..."]).unwrap();
        let top = Rect::new(0, 0, 2, 1);
        let bottom_left = Rect::new(0, 2, 2, 1);
        assert!(rooms_connected(&grid, &[top, Rect::new(4, 0, 2, 1)]));
        assert!(!rooms_connected(&grid, &[top, bottom_left]));
    }
}
