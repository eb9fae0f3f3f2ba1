//! Rectangles used while partitioning a level
//!
//! A rectangle covers the half-open ranges `x..x + width` and `y..y + height`.

use serde::{Deserialize, Serialize};

/// A sub-region of the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Center cell, rounding towards the top-left
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if the rectangle has positive area
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Check if a point lies inside
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another
    pub const fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.right() >= other.right()
            && self.y <= other.y
            && self.bottom() >= other.bottom()
    }

    /// Check if this rectangle shares at least one cell with another
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Split into a left part `offset` columns wide and the remaining right part
    pub const fn split_vertical(&self, offset: i32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, offset, self.height),
            Rect::new(self.x + offset, self.y, self.width - offset, self.height),
        )
    }

    /// Split into a top part `offset` rows tall and the remaining bottom part
    pub const fn split_horizontal(&self, offset: i32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, self.width, offset),
            Rect::new(self.x, self.y + offset, self.width, self.height - offset),
        )
    }

    /// Check if a point lies on the outer ring
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.contains_point(x, y)
            && (x == self.x || x == self.right() - 1 || y == self.y || y == self.bottom() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(10, 20, 6, 4);
        assert_eq!(r.right(), 16);
        assert_eq!(r.bottom(), 24);
        assert_eq!(r.area(), 24);
        assert_eq!(r.center(), (13, 22));
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0, 0, 20, 20);
        let inner = Rect::new(5, 5, 5, 5);
        let outside = Rect::new(25, 25, 5, 5);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&outside));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_rect_intersects() {
        let r1 = Rect::new(0, 0, 10, 10);
        let r2 = Rect::new(5, 5, 10, 10);
        let r3 = Rect::new(10, 0, 5, 5);

        assert!(r1.intersects(&r2));
        assert!(r2.intersects(&r1));
        // touching edges do not share a cell
        assert!(!r1.intersects(&r3));
    }

    #[test]
    fn test_splits_partition_parent() {
        let r = Rect::new(3, 4, 10, 7);

        let (left, right) = r.split_vertical(4);
        assert_eq!(left, Rect::new(3, 4, 4, 7));
        assert_eq!(right, Rect::new(7, 4, 6, 7));
        assert!(!left.intersects(&right));
        assert_eq!(left.area() + right.area(), r.area());

        let (top, bottom) = r.split_horizontal(3);
        assert_eq!(top, Rect::new(3, 4, 10, 3));
        assert_eq!(bottom, Rect::new(3, 7, 10, 4));
        assert!(!top.intersects(&bottom));
    }

    #[test]
    fn test_border() {
        let r = Rect::new(0, 0, 3, 3);
        assert!(r.is_border(0, 0));
        assert!(r.is_border(2, 1));
        assert!(!r.is_border(1, 1));
        assert!(!r.is_border(3, 1));
    }
}
