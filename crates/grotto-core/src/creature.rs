//! The player character and its movement over a grid

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::{CellPredicate, Direction, Grid, is_traversable};

/// Cells moved per movement command unless configured otherwise
pub const DEFAULT_MOVEMENT: u32 = 1;

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Cells covered by one `move_in` command
    pub movement: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0,
            y: 0,
            movement: DEFAULT_MOVEMENT,
        }
    }

    pub fn with_movement(mut self, movement: u32) -> Self {
        self.movement = movement;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Move one cell. Fails with `Blocked` when the target is not traversable
    /// or off the grid; the player stays put in that case.
    pub fn step(&mut self, grid: &Grid, dir: Direction) -> Result<(), GridError> {
        let (tx, ty) = dir.offset(self.x, self.y);
        if !grid.test(&is_traversable(), tx, ty) {
            return Err(GridError::Blocked { x: tx, y: ty });
        }
        self.x = tx;
        self.y = ty;
        Ok(())
    }

    /// Move `steps` cells one at a time.
    ///
    /// Stops at the first blocked step and reports it. Steps already taken
    /// are kept.
    pub fn move_steps(&mut self, grid: &Grid, dir: Direction, steps: u32) -> Result<(), GridError> {
        for _ in 0..steps {
            self.step(grid, dir)?;
        }
        Ok(())
    }

    /// Move as far as the player's movement allows
    pub fn move_in(&mut self, grid: &Grid, dir: Direction) -> Result<(), GridError> {
        self.move_steps(grid, dir, self.movement)
    }

    /// Put the player on the first cell matching `predicate` in row-major
    /// order. Returns false, leaving the player where it was, if none matches.
    pub fn place_at_first_matching<P: CellPredicate>(&mut self, grid: &Grid, predicate: &P) -> bool {
        match grid.find_first(predicate) {
            Some((x, y)) => {
                self.x = x;
                self.y = y;
                true
            }
            None => false,
        }
    }
}
