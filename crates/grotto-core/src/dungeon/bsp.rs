//! Binary space partitioning level generator
//!
//! The playable area is split recursively into rectangles, a walled room is
//! carved in every leaf, and the two halves of every split are joined by a
//! straight corridor between their centers.
//!
//! Every leaf room covers the center of its rectangle, and the center of a
//! split rectangle lies on the corridor joining its two halves, so every room
//! ends up connected to every other.

use crate::consts::MIN_ROOM_SPAN;
use crate::error::{DungeonError, GridError};
use crate::grid::{Cell, CellPredicate, CellType, Grid, convert_to, is_type};
use crate::rng::GameRng;

use super::rect::Rect;
use super::walls::build_cavern_walls;

/// Node of the partition tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspNode {
    pub rect: Rect,
    /// Carved room including its Wall ring (leaves only, once delved)
    pub room: Option<Rect>,
    children: Option<(usize, usize)>,
}

impl BspNode {
    fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            room: None,
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Partition tree stored as an arena; children always sit after their parent
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    /// Split `root` until no node can be divided into two parts that both keep
    /// the minimum dimensions.
    pub fn partition(root: Rect, min_width: i32, min_height: i32, rng: &mut GameRng) -> Self {
        let mut nodes = vec![BspNode::leaf(root)];
        let mut pending = vec![0];

        while let Some(idx) = pending.pop() {
            let rect = nodes[idx].rect;
            let Some((a, b)) = split(rect, min_width, min_height, rng) else {
                continue;
            };
            log::trace!("bsp: split {:?} into {:?} and {:?}", rect, a, b);

            let first = nodes.len();
            nodes.push(BspNode::leaf(a));
            nodes.push(BspNode::leaf(b));
            nodes[idx].children = Some((first, first + 1));
            pending.push(first + 1);
            pending.push(first);
        }

        Self { nodes }
    }

    pub fn root(&self) -> &BspNode {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[BspNode] {
        &self.nodes
    }

    /// Both children of a node, `None` for a leaf
    pub fn children(&self, node: &BspNode) -> Option<(&BspNode, &BspNode)> {
        node.children.map(|(a, b)| (&self.nodes[a], &self.nodes[b]))
    }

    pub fn leaves(&self) -> impl Iterator<Item = &BspNode> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Carve a walled room into every leaf
    pub fn delve_rooms(&mut self, grid: &mut Grid, rng: &mut GameRng) -> Result<(), GridError> {
        for node in self.nodes.iter_mut().filter(|n| n.children.is_none()) {
            let room = place_room(node.rect, rng);
            carve_room(grid, room)?;
            node.room = Some(room);
        }
        Ok(())
    }

    /// Join the centers of every pair of siblings with a straight corridor,
    /// deepest splits first. Only Wall and SolidRock are dug out.
    /// Returns the number of cells turned into corridor.
    pub fn connect_rooms(&self, grid: &mut Grid) -> usize {
        let dig = convert_to(CellType::Corridor);
        let diggable = is_type(CellType::SolidRock).or(is_type(CellType::Wall));

        self.nodes
            .iter()
            .rev()
            .filter_map(|node| self.children(node))
            .map(|(a, b)| {
                let (x0, y0) = a.rect.center();
                let (x1, y1) = b.rect.center();
                grid.rasterize_line(&dig, &diggable, x0, y0, x1, y1)
            })
            .sum()
    }
}

/// Divide a rectangle in two, or `None` if it must stay a leaf.
fn split(rect: Rect, min_width: i32, min_height: i32, rng: &mut GameRng) -> Option<(Rect, Rect)> {
    let vertical_ok = rect.width > 2 * min_width;
    let horizontal_ok = rect.height > 2 * min_height;

    let vertical = match (vertical_ok, horizontal_ok) {
        (false, false) => return None,
        (true, false) => true,
        (false, true) => false,
        (true, true) => rng.coin_flip(),
    };

    if vertical {
        let offset = rng.range(min_width, rect.width - min_width);
        Some(rect.split_vertical(offset))
    } else {
        let offset = rng.range(min_height, rect.height - min_height);
        Some(rect.split_horizontal(offset))
    }
}

/// Pick a room inside `rect` whose interior covers the rectangle's center
fn place_room(rect: Rect, rng: &mut GameRng) -> Rect {
    let width = room_span(rect.width, rng);
    let height = room_span(rect.height, rng);
    let dx = room_offset(rect.width, width, rng);
    let dy = room_offset(rect.height, height, rng);
    Rect::new(rect.x + dx, rect.y + dy, width, height)
}

/// Room size along one axis: at least half the span and never below 3
fn room_span(span: i32, rng: &mut GameRng) -> i32 {
    let lo = (span / 2).max(MIN_ROOM_SPAN);
    if lo >= span {
        span
    } else {
        rng.range(lo, span)
    }
}

/// Offset of a `size` room in a `span` rectangle such that the cell at
/// `span / 2` is inside the room's Wall ring
fn room_offset(span: i32, size: i32, rng: &mut GameRng) -> i32 {
    let center = span / 2;
    let lo = (center + 2 - size).max(0);
    let hi = (center - 1).min(span - size);
    rng.range(lo, hi + 1)
}

fn carve_room(grid: &mut Grid, room: Rect) -> Result<(), GridError> {
    for y in room.y..room.bottom() {
        for x in room.x..room.right() {
            let typ = if room.is_border(x, y) {
                CellType::Wall
            } else {
                CellType::Room
            };
            grid.set(x, y, Cell::new(typ))?;
        }
    }
    Ok(())
}

/// Generate a room-and-corridor level by binary space partitioning.
///
/// The partitioned area is the map inset by one cell on every edge. Fails with
/// `DegenerateDimensions` when that area cannot hold one node of the minimum
/// size, or when a minimum dimension is below 3.
pub fn generate_bsp_dungeon(
    width: usize,
    height: usize,
    min_node_width: i32,
    min_node_height: i32,
    rng: &mut GameRng,
) -> Result<Grid, DungeonError> {
    let root = Rect::new(1, 1, width as i32 - 2, height as i32 - 2);
    if min_node_width < MIN_ROOM_SPAN
        || min_node_height < MIN_ROOM_SPAN
        || root.width < min_node_width
        || root.height < min_node_height
    {
        return Err(DungeonError::DegenerateDimensions {
            width,
            height,
            min_node_width,
            min_node_height,
        });
    }

    log::debug!(
        "bsp: {}x{} min node {}x{} seed={}",
        width,
        height,
        min_node_width,
        min_node_height,
        rng.seed()
    );

    let mut grid = Grid::new(width, height);
    let mut tree = BspTree::partition(root, min_node_width, min_node_height, rng);
    tree.delve_rooms(&mut grid, rng)?;
    let dug = tree.connect_rooms(&mut grid);
    log::debug!(
        "bsp: {} rooms, {} corridor cells",
        tree.leaves().count(),
        dug
    );

    build_cavern_walls(&mut grid);
    Ok(grid)
}
