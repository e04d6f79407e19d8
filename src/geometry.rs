use serde::{Deserialize, Serialize};

/// A tile coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle representing a room or region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// One past the last column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the last row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `inner` lies inside this rectangle with at least `margin`
    /// tiles to spare on every side.
    pub fn contains_with_margin(&self, inner: &Rect, margin: i32) -> bool {
        inner.x >= self.x + margin
            && inner.y >= self.y + margin
            && inner.right() <= self.right() - margin
            && inner.bottom() <= self.bottom() - margin
    }
}

/// One straight run of an L-shaped corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: Point,
    pub to: Point,
}

impl Corridor {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0, 0, 10, 10);
        assert_eq!(rect.center(), Point::new(5, 5));

        let rect2 = Rect::new(5, 5, 4, 6);
        assert_eq!(rect2.center(), Point::new(7, 8));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 7));
        assert!(!rect.contains(5, 8));
    }

    #[test]
    fn test_adjacent_rects_do_not_intersect() {
        let left = Rect::new(0, 0, 10, 20);
        let right = Rect::new(10, 0, 10, 20);
        assert!(!left.intersects(&right));
        assert!(left.intersects(&Rect::new(9, 19, 5, 5)));
    }

    #[test]
    fn test_margin_containment() {
        let leaf = Rect::new(0, 0, 10, 10);
        assert!(leaf.contains_with_margin(&Rect::new(1, 1, 8, 8), 1));
        assert!(!leaf.contains_with_margin(&Rect::new(0, 1, 8, 8), 1));
        assert!(!leaf.contains_with_margin(&Rect::new(2, 2, 8, 2), 1));
    }

    #[test]
    fn test_corridor_orientation() {
        let h = Corridor::new(Point::new(1, 4), Point::new(9, 4));
        assert!(h.is_horizontal());
        assert!(!h.is_vertical());
        let v = Corridor::new(Point::new(3, 1), Point::new(3, 8));
        assert!(v.is_vertical());
    }
}
