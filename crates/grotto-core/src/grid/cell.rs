//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_CORR, S_DNSTAIR, S_ROOM, S_STONE, S_UPSTAIR, S_WALL};

/// Cell/terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    SolidRock = 0,
    Wall = 1,
    Room = 2,
    Corridor = 3,
    StaircaseUp = 4,
    StaircaseDown = 5,
}

impl CellType {
    /// Check if a creature can stand here
    pub const fn is_traversable(&self) -> bool {
        matches!(
            self,
            CellType::Room | CellType::Corridor | CellType::StaircaseUp | CellType::StaircaseDown
        )
    }

    /// Check if this is a staircase
    pub const fn is_staircase(&self) -> bool {
        matches!(self, CellType::StaircaseUp | CellType::StaircaseDown)
    }

    /// Get the display character for this cell type
    pub const fn glyph(&self) -> char {
        match self {
            CellType::SolidRock => S_STONE,
            CellType::Wall => S_WALL,
            CellType::Room => S_ROOM,
            CellType::Corridor => S_CORR,
            CellType::StaircaseUp => S_UPSTAIR,
            CellType::StaircaseDown => S_DNSTAIR,
        }
    }

    /// Short text shown when looking at the cell
    pub const fn description(&self) -> &'static str {
        match self {
            CellType::SolidRock => "solid rock",
            CellType::Wall => "wall",
            CellType::Room => "thin air",
            CellType::Corridor => "corridor",
            CellType::StaircaseUp => "staircase up",
            CellType::StaircaseDown => "staircase down",
        }
    }

    /// The staircase that leads back the other way
    pub const fn opposite_staircase(&self) -> Option<CellType> {
        match self {
            CellType::StaircaseUp => Some(CellType::StaircaseDown),
            CellType::StaircaseDown => Some(CellType::StaircaseUp),
            _ => None,
        }
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Terrain type
    pub typ: CellType,

    /// Scratch mark for connectivity passes; false outside of one
    pub checked: bool,
}

impl Cell {
    /// Create an unchecked cell of the given type
    pub const fn new(typ: CellType) -> Self {
        Self {
            typ,
            checked: false,
        }
    }

    /// Create a solid rock cell
    pub const fn solid() -> Self {
        Self::new(CellType::SolidRock)
    }

    pub const fn is_traversable(&self) -> bool {
        self.typ.is_traversable()
    }

    pub const fn glyph(&self) -> char {
        self.typ.glyph()
    }
}

impl From<CellType> for Cell {
    fn from(typ: CellType) -> Self {
        Cell::new(typ)
    }
}
