//! Wall shell around open space
//!
//! After generation every non-traversable cell touching open space (Moore
//! neighbourhood) must be Wall, and the rock mass behind it stays SolidRock,
//! so the shell is exactly one cell thick.

use crate::grid::{CellPredicate, CellType, Grid, convert_to, is_traversable, is_type};

/// Build a one-cell-thick Wall shell around all traversable cells.
///
/// Every non-traversable cell becomes Wall first. Cells that are Wall with all
/// eight neighbours Wall (off-grid counts as Wall) are buried rock; they are
/// recorded in a shadow grid and reverted to SolidRock in a second pass, so
/// reverting one cell never changes the outcome for its neighbours.
/// Traversable cells are never touched, which makes the pass idempotent.
pub fn build_cavern_walls(grid: &mut Grid) {
    let wall = is_type(CellType::Wall);

    grid.apply_to_all_matching(&convert_to(CellType::Wall), &is_traversable().not());

    let mut shadow = Grid::filled(grid.width(), grid.height(), CellType::Wall);
    let buried = shadow.apply_where(&convert_to(CellType::SolidRock), |_, x, y| {
        grid.test(&wall, x, y) && grid.count_neighbors_matching(&wall, x, y) == 8
    });

    let rock = is_type(CellType::SolidRock);
    grid.apply_where(&convert_to(CellType::SolidRock), |_, x, y| {
        shadow.test(&rock, x, y)
    });

    log::trace!("wall shell: {} buried cells reverted to rock", buried);
}
