//! grotto-core: dungeon generation engine for the grotto roguelike
//!
//! Levels are 2-D grids of terrain cells produced by one of two generators:
//! binary space partitioning for rooms joined by corridors, or a cellular
//! automaton for natural caverns. Every generated level is fully connected,
//! walled in by a one-cell shell and carries an up and a down staircase.
//!
//! Generation is a pure function of its parameters and a seeded [`GameRng`].

pub mod creature;
pub mod dungeon;
pub mod error;
pub mod grid;
pub mod level;

mod consts;
mod rng;

pub use consts::*;
pub use error::{DungeonError, GridError};
pub use rng::GameRng;
