//! Bresenham line rasterization

/// Iterator over the cells of a straight line, endpoints included
///
/// Standard integer Bresenham: the error accumulator starts at `|dx| - |dy|`
/// and steps are chosen by comparing twice the error against `-|dy|` and `|dx|`.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    /// Line walked from `(x0, y0)` to `(x1, y1)` in that order
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// Line between two endpoints, walked from the smaller `(x, y)` pair.
    ///
    /// Plain Bresenham breaks ties differently depending on direction; fixing
    /// the walk order makes `a -> b` and `b -> a` cover the same cells.
    pub fn between(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        if (x1, y1) < (x0, y0) {
            Self::new(x1, y1, x0, y0)
        } else {
            Self::new(x0, y0, x1, y1)
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let point = (self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let pts: Vec<_> = BresenhamLine::new(3, 4, 3, 4).collect();
        assert_eq!(pts, vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let h: Vec<_> = BresenhamLine::new(0, 2, 3, 2).collect();
        assert_eq!(h, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);

        let v: Vec<_> = BresenhamLine::new(1, 3, 1, 0).collect();
        assert_eq!(v, vec![(1, 3), (1, 2), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_diagonal() {
        let d: Vec<_> = BresenhamLine::new(0, 0, 3, 3).collect();
        assert_eq!(d, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_shallow_slope_tie_breaking() {
        // dx = 2, dy = 1: the first step is horizontal, the second diagonal
        let pts: Vec<_> = BresenhamLine::new(0, 0, 2, 1).collect();
        assert_eq!(pts, vec![(0, 0), (1, 0), (2, 1)]);

        // Walked backwards the tie resolves the other way
        let back: Vec<_> = BresenhamLine::new(2, 1, 0, 0).collect();
        assert_eq!(back, vec![(2, 1), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_between_is_order_independent() {
        let a: Vec<_> = BresenhamLine::between(0, 0, 2, 1).collect();
        let b: Vec<_> = BresenhamLine::between(2, 1, 0, 0).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_length_is_chebyshev_distance_plus_one() {
        let pts: Vec<_> = BresenhamLine::new(-3, 7, 9, 2).collect();
        assert_eq!(pts.len(), 13);
        assert_eq!(pts.first(), Some(&(-3, 7)));
        assert_eq!(pts.last(), Some(&(9, 2)));
    }
}
