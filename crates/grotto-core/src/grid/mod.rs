//! Dense 2-D map of cells
//!
//! The grid owns its cells and hands them out by coordinate only. Every
//! generator works through this contract: primitive `get`/`set`, predicate
//! tests, single-cell and bulk modifications, neighbour counting, flood fill
//! and line rasterization.

mod cell;
mod direction;
mod line;
mod predicate;

use std::fmt;

use strum::IntoEnumIterator;

use crate::consts::S_UNKNOWN;
use crate::error::GridError;
use crate::rng::GameRng;

pub use cell::{Cell, CellType};
pub use direction::Direction;
pub use line::BresenhamLine;
pub use predicate::{
    And, AndThen, CellModification, CellPredicate, Checked, ClearChecked, ConvertTo, IsType,
    MarkChecked, Not, Or, Traversable, clear_checked, convert_to, is_checked, is_traversable,
    is_type, mark_checked,
};

/// Row-major grid of `width * height` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of solid rock
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, CellType::SolidRock)
    }

    /// Create a grid where every cell has the given type
    pub fn filled(width: usize, height: usize, typ: CellType) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::new(typ); width * height],
        }
    }

    /// Create a grid where each cell independently becomes `solid` with
    /// `solid_percentage`% probability, otherwise `hollow`.
    pub fn random(
        width: usize,
        height: usize,
        solid_percentage: u8,
        solid: CellType,
        hollow: CellType,
        rng: &mut GameRng,
    ) -> Self {
        let cells = (0..width * height)
            .map(|_| {
                if rng.percent(solid_percentage as u32) {
                    Cell::new(solid)
                } else {
                    Cell::new(hollow)
                }
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether (x, y) lies on the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(y as usize * self.width + x as usize)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Return the cell at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Replace the cell at (x, y)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Test the cell at (x, y). Off-grid coordinates fail every predicate.
    pub fn test<P: CellPredicate>(&self, predicate: &P, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Ok(idx) => predicate.test(&self.cells[idx]),
            Err(_) => false,
        }
    }

    /// Apply a modification to the cell at (x, y)
    pub fn apply_at<M: CellModification>(
        &mut self,
        modification: &M,
        x: i32,
        y: i32,
    ) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = modification.apply(self.cells[idx]);
        Ok(())
    }

    /// Apply a modification to the cell at (x, y) if it matches.
    /// Returns whether the cell was modified.
    pub fn apply_at_if_matching<M: CellModification, P: CellPredicate>(
        &mut self,
        modification: &M,
        predicate: &P,
        x: i32,
        y: i32,
    ) -> Result<bool, GridError> {
        let idx = self.index(x, y)?;
        if predicate.test(&self.cells[idx]) {
            self.cells[idx] = modification.apply(self.cells[idx]);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Apply a modification to every cell
    pub fn apply_to_all<M: CellModification>(&mut self, modification: &M) {
        for cell in &mut self.cells {
            *cell = modification.apply(*cell);
        }
    }

    /// Apply a modification to every cell matching a predicate
    pub fn apply_to_all_matching<M: CellModification, P: CellPredicate>(
        &mut self,
        modification: &M,
        predicate: &P,
    ) {
        for cell in &mut self.cells {
            if predicate.test(cell) {
                *cell = modification.apply(*cell);
            }
        }
    }

    /// Apply a modification at every location where `condition(grid, x, y)` holds.
    ///
    /// All locations are tested against the unmodified grid before any cell
    /// changes, so a write never influences a later test in the same call.
    pub fn apply_where<M, F>(&mut self, modification: &M, condition: F) -> usize
    where
        M: CellModification,
        F: Fn(&Grid, i32, i32) -> bool,
    {
        let hits: Vec<usize> = self
            .positions()
            .filter(|&(x, y)| condition(self, x, y))
            .map(|(x, y)| y as usize * self.width + x as usize)
            .collect();
        for &idx in &hits {
            self.cells[idx] = modification.apply(self.cells[idx]);
        }
        hits.len()
    }

    /// Count the Moore neighbours of (x, y) matching a predicate.
    ///
    /// Off-grid neighbours always count as matching, so the map edge behaves
    /// like solid rock to the cavern smoothing rules.
    pub fn count_neighbors_matching<P: CellPredicate>(&self, predicate: &P, x: i32, y: i32) -> usize {
        Direction::iter()
            .map(|dir| dir.offset(x, y))
            .filter(|&(nx, ny)| match self.index(nx, ny) {
                Ok(idx) => predicate.test(&self.cells[idx]),
                Err(_) => true,
            })
            .count()
    }

    /// 4-connected flood fill from (x, y).
    ///
    /// Every reachable cell matching `select` gets `modification` applied.
    /// The modification must take the cell out of `select`, otherwise the fill
    /// never runs out of work. Uses an explicit work list, so large grids do
    /// not exhaust the call stack. Returns the number of cells modified.
    pub fn apply_to_connected<M: CellModification, P: CellPredicate>(
        &mut self,
        modification: &M,
        select: &P,
        x: i32,
        y: i32,
    ) -> usize {
        let mut modified = 0;
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            let Ok(idx) = self.index(cx, cy) else {
                continue;
            };
            if !select.test(&self.cells[idx]) {
                continue;
            }
            self.cells[idx] = modification.apply(self.cells[idx]);
            modified += 1;

            // Reversed so West is explored first, as a recursive fill would
            for dir in Direction::CARDINALS.iter().rev() {
                stack.push(dir.offset(cx, cy));
            }
        }

        modified
    }

    /// Rasterize a straight line between two points, applying `modification`
    /// to every visited on-grid cell that matches `predicate`.
    ///
    /// The same pair of endpoints always yields the same cells regardless of
    /// argument order. Returns the number of cells modified.
    pub fn rasterize_line<M: CellModification, P: CellPredicate>(
        &mut self,
        modification: &M,
        predicate: &P,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> usize {
        let mut modified = 0;
        for (x, y) in BresenhamLine::between(x0, y0, x1, y1) {
            if let Ok(true) = self.apply_at_if_matching(modification, predicate, x, y) {
                modified += 1;
            }
        }
        modified
    }

    /// Set every cell of row `y` to `typ`
    pub fn fill_row(&mut self, y: i32, typ: CellType) -> Result<(), GridError> {
        self.index(0, y)?;
        for x in 0..self.width as i32 {
            self.set(x, y, Cell::new(typ))?;
        }
        Ok(())
    }

    /// Set every cell of column `x` to `typ`
    pub fn fill_column(&mut self, x: i32, typ: CellType) -> Result<(), GridError> {
        self.index(x, 0)?;
        for y in 0..self.height as i32 {
            self.set(x, y, Cell::new(typ))?;
        }
        Ok(())
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Number of cells matching a predicate
    pub fn count_matching<P: CellPredicate>(&self, predicate: &P) -> usize {
        self.cells.iter().filter(|c| predicate.test(c)).count()
    }

    /// First matching cell in row-major scan order
    pub fn find_first<P: CellPredicate>(&self, predicate: &P) -> Option<(i32, i32)> {
        self.cells
            .iter()
            .position(|c| predicate.test(c))
            .map(|idx| ((idx % self.width) as i32, (idx / self.width) as i32))
    }

    /// Display character at (x, y), `'?'` off the grid
    pub fn glyph_at(&self, x: i32, y: i32) -> char {
        self.get(x, y).map(|c| c.glyph()).unwrap_or(S_UNKNOWN)
    }

    /// One text row per grid row, each terminated by a newline
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height as i32 {
            out.extend((0..self.width as i32).map(|x| self.glyph_at(x, y)));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
