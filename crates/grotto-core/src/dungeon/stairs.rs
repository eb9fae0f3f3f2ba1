//! Staircase placement

use serde::{Deserialize, Serialize};

use crate::error::DungeonError;
use crate::grid::{CellType, Grid, convert_to, is_traversable, is_type};
use crate::rng::GameRng;

/// Where the two staircases of a level were placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staircases {
    pub up: (i32, i32),
    pub down: (i32, i32),
}

/// Place one up and one down staircase on distinct traversable cells.
///
/// Cells are picked by rejection sampling uniformly over the whole grid. The
/// down staircase is re-sampled until it lands somewhere other than the up one.
pub fn add_staircases(grid: &mut Grid, rng: &mut GameRng) -> Result<Staircases, DungeonError> {
    let open_cells = grid.count_matching(&is_traversable());
    if open_cells < 2 {
        return Err(DungeonError::NoRoomForStairs { open_cells });
    }

    let up = sample_traversable(grid, rng);
    grid.apply_at(&convert_to(CellType::StaircaseUp), up.0, up.1)?;

    let down = loop {
        let candidate = sample_traversable(grid, rng);
        if candidate != up {
            break candidate;
        }
        log::trace!("stairs: down staircase landed on up staircase, retrying");
    };
    grid.apply_at(&convert_to(CellType::StaircaseDown), down.0, down.1)?;

    log::debug!("stairs: up at {:?}, down at {:?}", up, down);
    Ok(Staircases { up, down })
}

fn sample_traversable(grid: &Grid, rng: &mut GameRng) -> (i32, i32) {
    loop {
        let (x, y) = rng.random_coord(grid.width(), grid.height());
        if grid.test(&is_traversable(), x, y) {
            return (x, y);
        }
    }
}

/// First staircase of the given kind in row-major scan order
pub fn find_staircase(grid: &Grid, typ: CellType) -> Option<(i32, i32)> {
    grid.find_first(&is_type(typ))
}
