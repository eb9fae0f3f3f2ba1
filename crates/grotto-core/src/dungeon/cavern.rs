//! Natural cavern generation with a cellular automaton
//!
//! 1. Seed the map with random rock.
//! 2. Smooth it by majority vote over the Moore neighbourhood, double buffered.
//! 3. Seal every pocket of open space not reachable from the main cavern.
//! 4. Build the wall shell.

use strum::IntoEnumIterator;

use crate::consts::{HOLLOW_MAX, SOLID_MIN};
use crate::error::{DungeonError, GridError};
use crate::grid::{Cell, CellType, Direction, Grid, convert_to, is_type};
use crate::rng::GameRng;

use super::connectivity::{Region, largest_region};
use super::walls::build_cavern_walls;

const SOLID: CellType = CellType::SolidRock;
const HOLLOW: CellType = CellType::Room;

/// Cellular automaton state: the live grid plus a scratch buffer of the same size
#[derive(Debug, Clone)]
pub struct CavernGenerator {
    grid: Grid,
    shadow: Grid,
}

impl CavernGenerator {
    /// Start from random noise: each cell is rock with `solid_percentage`% chance
    pub fn seeded(width: usize, height: usize, solid_percentage: u8, rng: &mut GameRng) -> Self {
        Self::from_grid(Grid::random(width, height, solid_percentage, SOLID, HOLLOW, rng))
    }

    /// Start from an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        let shadow = Grid::filled(grid.width(), grid.height(), HOLLOW);
        Self { grid, shadow }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// One smoothing round.
    ///
    /// A cell with at most 3 rock neighbours becomes hollow, one with more than
    /// 5 becomes rock, anything between keeps its type. The map edge counts as
    /// rock. New values go to the scratch buffer and the buffers are swapped at
    /// the end, so every cell sees the previous round's neighbours.
    pub fn smooth(&mut self) -> Result<(), GridError> {
        let rock = is_type(SOLID);
        for (x, y) in self.grid.positions() {
            let count = self.grid.count_neighbors_matching(&rock, x, y);
            let next = if count <= HOLLOW_MAX {
                Cell::new(HOLLOW)
            } else if count > SOLID_MIN {
                Cell::new(SOLID)
            } else {
                self.grid.get(x, y)?
            };
            self.shadow.set(x, y, next)?;
        }
        std::mem::swap(&mut self.grid, &mut self.shadow);
        Ok(())
    }

    /// Turn every hollow cell not connected to the main cavern into rock.
    ///
    /// The main cavern is the region around the first hollow cell (row-major)
    /// whose eight neighbours are all on the map and hollow. Without such a
    /// cell the largest hollow region is kept. Returns the number of cells sealed.
    pub fn seal_unreachable_pockets(&mut self) -> usize {
        let hollow = is_type(HOLLOW);

        let keep = match self.interior_seed() {
            Some((x, y)) => Region::flood(&self.grid, &hollow, x, y),
            None => {
                log::warn!(
                    "cavern {}x{} has no fully hollow interior cell, keeping largest region",
                    self.grid.width(),
                    self.grid.height()
                );
                match largest_region(&self.grid, &hollow) {
                    Some(region) => region,
                    None => return 0,
                }
            }
        };

        self.grid.apply_where(&convert_to(SOLID), |g, x, y| {
            g.test(&hollow, x, y) && !keep.contains(x, y)
        })
    }

    fn interior_seed(&self) -> Option<(i32, i32)> {
        let hollow = is_type(HOLLOW);
        self.grid.positions().find(|&(x, y)| {
            self.grid.test(&hollow, x, y)
                && Direction::iter().all(|dir| {
                    let (nx, ny) = dir.offset(x, y);
                    self.grid.test(&hollow, nx, ny)
                })
        })
    }
}

/// Generate a natural cavern level.
///
/// `solid_percentage` is the percent chance a cell starts as solid rock; values
/// above 100 are rejected. A 0x0 map is valid and produces an empty grid.
pub fn generate_cavern_dungeon(
    width: usize,
    height: usize,
    solid_percentage: u8,
    smoothing_rounds: u32,
    rng: &mut GameRng,
) -> Result<Grid, DungeonError> {
    if solid_percentage > 100 {
        return Err(DungeonError::parameters(format!(
            "solid percentage {} exceeds 100",
            solid_percentage
        )));
    }

    log::debug!(
        "cavern: {}x{} solid={}% rounds={} seed={}",
        width,
        height,
        solid_percentage,
        smoothing_rounds,
        rng.seed()
    );

    let mut cavern = CavernGenerator::seeded(width, height, solid_percentage, rng);
    for round in 0..smoothing_rounds {
        cavern.smooth()?;
        log::trace!(
            "cavern: round {} leaves {} hollow cells",
            round + 1,
            cavern.grid().count_matching(&is_type(HOLLOW))
        );
    }

    let sealed = cavern.seal_unreachable_pockets();
    log::debug!("cavern: sealed {} unreachable cells", sealed);

    let mut grid = cavern.into_grid();
    build_cavern_walls(&mut grid);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::connectivity::is_fully_connected;
    use crate::grid::{CellPredicate, is_checked, is_traversable};

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    grid.set(x as i32, y as i32, Cell::new(HOLLOW)).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_smooth_fills_isolated_hollow() {
        let mut cavern = CavernGenerator::from_grid(grid_from(&["     ", "  .  ", "     "]));
        cavern.smooth().unwrap();
        assert_eq!(cavern.grid().count_matching(&is_type(HOLLOW)), 0);
    }

    #[test]
    fn test_smooth_hollows_open_area() {
        let mut cavern = CavernGenerator::from_grid(Grid::filled(7, 7, HOLLOW));
        cavern.grid.set(3, 3, Cell::new(SOLID)).unwrap();
        cavern.smooth().unwrap();
        // lone rock in open space has 0 rock neighbours and disappears
        assert!(cavern.grid().test(&is_type(HOLLOW), 3, 3));
        // corners see 5 off-grid neighbours and keep their type
        assert!(cavern.grid().test(&is_type(HOLLOW), 0, 0));
    }

    #[test]
    fn test_smooth_is_double_buffered() {
        // Row of hollow cells in rock: an in-place update would let the first
        // cell's result change what its neighbours count.
        let grid = grid_from(&[
            "      ", //
            " .... ",
            " .... ",
            "      ",
        ]);
        let mut cavern = CavernGenerator::from_grid(grid.clone());
        cavern.smooth().unwrap();

        let rock = is_type(SOLID);
        for (x, y) in grid.positions() {
            let count = grid.count_neighbors_matching(&rock, x, y);
            let expected = if count <= 3 {
                HOLLOW
            } else if count > 5 {
                SOLID
            } else {
                grid.get(x, y).unwrap().typ
            };
            assert_eq!(cavern.grid().get(x, y).unwrap().typ, expected, "at ({x}, {y})");
        }
    }

    #[test]
    fn test_seal_unreachable_pockets() {
        let grid = grid_from(&[
            "          ", //
            " ....   . ",
            " ....  .. ",
            " ....     ",
            "          ",
        ]);
        let mut cavern = CavernGenerator::from_grid(grid);
        let sealed = cavern.seal_unreachable_pockets();
        assert_eq!(sealed, 3);
        assert_eq!(cavern.grid().count_matching(&is_type(HOLLOW)), 12);
        assert!(is_fully_connected(cavern.grid(), &is_traversable()));
        assert_eq!(cavern.grid().count_matching(&is_checked()), 0);
    }

    #[test]
    fn test_seal_falls_back_to_largest_region() {
        let grid = grid_from(&[
            "       ", //
            " ..  . ",
            " ..    ",
        ]);
        let mut cavern = CavernGenerator::from_grid(grid);
        assert_eq!(cavern.seal_unreachable_pockets(), 1);
        assert_eq!(cavern.grid().count_matching(&is_type(HOLLOW)), 4);
    }

    #[test]
    fn test_seal_all_rock_is_noop() {
        let mut cavern = CavernGenerator::from_grid(Grid::new(4, 4));
        assert_eq!(cavern.seal_unreachable_pockets(), 0);
    }

    #[test]
    fn test_generate_cavern_dungeon() {
        let mut rng = GameRng::new(42);
        let grid = generate_cavern_dungeon(80, 20, 45, 2, &mut rng).unwrap();
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 20);
        assert!(grid.count_matching(&is_traversable()) > 0);
        assert!(is_fully_connected(&grid, &is_traversable()));
        assert_eq!(grid.count_matching(&is_checked()), 0);
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = generate_cavern_dungeon(40, 20, 45, 3, &mut GameRng::new(9)).unwrap();
        let b = generate_cavern_dungeon(40, 20, 45, 3, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_percentage_above_100() {
        let err = generate_cavern_dungeon(10, 10, 101, 2, &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(err, DungeonError::DegenerateParameters { .. }));
    }

    #[test]
    fn test_empty_map_is_noop() {
        let grid = generate_cavern_dungeon(0, 0, 45, 4, &mut GameRng::new(1)).unwrap();
        assert_eq!(grid.render(), "");
    }

    #[test]
    fn test_full_rock_produces_no_open_space() {
        let grid = generate_cavern_dungeon(12, 8, 100, 2, &mut GameRng::new(1)).unwrap();
        assert_eq!(grid.count_matching(&is_traversable()), 0);
        assert_eq!(grid.count_matching(&is_type(SOLID).not()), 0);
    }
}
