//! Reachability analysis
//!
//! Flood fills that record visited cells in a mask owned by the analysis
//! instead of marking the cells themselves, so nothing has to be cleaned up
//! afterwards.

use crate::grid::{CellPredicate, Direction, Grid};

/// A 4-connected set of cells found by one flood fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: usize,
    mask: Vec<bool>,
    size: usize,
}

impl Region {
    fn empty(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            mask: vec![false; grid.width() * grid.height()],
            size: 0,
        }
    }

    fn slot(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width {
            return None;
        }
        let idx = y as usize * self.width + x as usize;
        (idx < self.mask.len()).then_some(idx)
    }

    /// Every cell matching `predicate` that is 4-connected to (x, y).
    /// Empty if (x, y) itself does not match.
    pub fn flood<P: CellPredicate>(grid: &Grid, predicate: &P, x: i32, y: i32) -> Self {
        let mut region = Self::empty(grid);
        region.grow(grid, predicate, x, y);
        region
    }

    fn grow<P: CellPredicate>(&mut self, grid: &Grid, predicate: &P, x: i32, y: i32) {
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let Some(idx) = self.slot(cx, cy) else {
                continue;
            };
            if self.mask[idx] || !grid.test(predicate, cx, cy) {
                continue;
            }
            self.mask[idx] = true;
            self.size += 1;
            for dir in Direction::CARDINALS {
                stack.push(dir.offset(cx, cy));
            }
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.slot(x, y).is_some_and(|idx| self.mask[idx])
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cells of the region in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &hit)| hit)
            .map(|(idx, _)| ((idx % self.width) as i32, (idx / self.width) as i32))
    }
}

/// Split all cells matching `predicate` into 4-connected regions,
/// ordered by the row-major position of their first cell.
pub fn regions<P: CellPredicate>(grid: &Grid, predicate: &P) -> Vec<Region> {
    let mut seen = Region::empty(grid);
    let mut found = Vec::new();

    for (x, y) in grid.positions() {
        if seen.contains(x, y) || !grid.test(predicate, x, y) {
            continue;
        }
        let region = Region::flood(grid, predicate, x, y);
        for (rx, ry) in region.positions() {
            if let Some(idx) = seen.slot(rx, ry) {
                seen.mask[idx] = true;
            }
        }
        found.push(region);
    }

    found
}

/// The biggest region; ties go to the one found first
pub fn largest_region<P: CellPredicate>(grid: &Grid, predicate: &P) -> Option<Region> {
    regions(grid, predicate)
        .into_iter()
        .reduce(|best, r| if r.len() > best.len() { r } else { best })
}

/// Whether all matching cells form a single 4-connected region.
/// Vacuously true when nothing matches.
pub fn is_fully_connected<P: CellPredicate>(grid: &Grid, predicate: &P) -> bool {
    match grid.find_first(predicate) {
        Some((x, y)) => Region::flood(grid, predicate, x, y).len() == grid.count_matching(predicate),
        None => true,
    }
}
