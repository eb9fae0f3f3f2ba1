//! Engine constants
//!
//! Default level dimensions and generation parameters used by the game.

/// Default map dimensions
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 20;

/// Default minimum BSP node dimensions
pub const DEFAULT_MIN_NODE_WIDTH: i32 = 7;
pub const DEFAULT_MIN_NODE_HEIGHT: i32 = 7;

/// Smallest node a BSP leaf may shrink to: a Wall ring around one Room cell
pub const MIN_ROOM_SPAN: i32 = 3;

/// Default percent chance that a cavern cell starts as solid rock
pub const DEFAULT_SOLID_PERCENTAGE: u8 = 45;

/// Default number of cellular automaton smoothing rounds
pub const DEFAULT_SMOOTHING_ROUNDS: u32 = 2;

/// Smoothing thresholds: at most HOLLOW_MAX solid neighbours hollows a cell,
/// more than SOLID_MIN solid neighbours fills it, anything between keeps it.
pub const HOLLOW_MAX: usize = 3;
pub const SOLID_MIN: usize = 5;

/// Glyph printed for coordinates outside the grid
pub const S_UNKNOWN: char = '?';

/// Map symbols
pub const S_STONE: char = ' ';
pub const S_WALL: char = '#';
pub const S_ROOM: char = '.';
pub const S_CORR: char = '.';
pub const S_UPSTAIR: char = '<';
pub const S_DNSTAIR: char = '>';
