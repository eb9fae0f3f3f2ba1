//! Level generators
//!
//! Two generators produce a fully connected [`Grid`](crate::grid::Grid):
//! binary space partitioning for rooms and corridors, and a cellular automaton
//! for natural caverns. Both finish with the same wall shell pass, after which
//! staircases are placed on the finished grid.

mod bsp;
mod cavern;
mod config;
mod connectivity;
mod rect;
mod stairs;
mod walls;

pub use bsp::{BspNode, BspTree, generate_bsp_dungeon};
pub use cavern::{CavernGenerator, generate_cavern_dungeon};
pub use config::{BspParams, CavernParams, DungeonConfig, LevelKind};
pub use connectivity::{Region, is_fully_connected, largest_region, regions};
pub use rect::Rect;
pub use stairs::{Staircases, add_staircases, find_staircase};
pub use walls::build_cavern_walls;
