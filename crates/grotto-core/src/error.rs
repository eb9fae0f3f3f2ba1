//! Error types for grid access and level generation.

use thiserror::Error;

/// Errors raised by coordinate-based grid access and movement
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("cannot move onto ({x}, {y}): not traversable")]
    Blocked { x: i32, y: i32 },
}

/// Errors raised when a level cannot be generated from the requested parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error(
        "{width}x{height} map cannot hold a {min_node_width}x{min_node_height} partition node"
    )]
    DegenerateDimensions {
        width: usize,
        height: usize,
        min_node_width: i32,
        min_node_height: i32,
    },

    #[error("invalid generation parameters: {reason}")]
    DegenerateParameters { reason: String },

    #[error("need two traversable cells for staircases, found {open_cells}")]
    NoRoomForStairs { open_cells: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl DungeonError {
    pub(crate) fn parameters(reason: impl Into<String>) -> Self {
        DungeonError::DegenerateParameters {
            reason: reason.into(),
        }
    }
}
