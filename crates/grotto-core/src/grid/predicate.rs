//! Cell predicates and modifications
//!
//! Generation code is written declaratively: "carve a corridor through every
//! solid cell on this line" becomes `grid.rasterize_line(&convert_to(Corridor),
//! &is_type(SolidRock).or(is_type(Wall)), ..)`. Both traits are implemented for
//! plain closures and for the small value types below, and the combinators build
//! new values instead of sharing state, so a predicate can be reused freely.

use super::cell::{Cell, CellType};

/// A side-effect free test on a single cell
pub trait CellPredicate {
    fn test(&self, cell: &Cell) -> bool;

    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: CellPredicate,
    {
        And(self, other)
    }

    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: CellPredicate,
    {
        Or(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> CellPredicate for F
where
    F: Fn(&Cell) -> bool,
{
    fn test(&self, cell: &Cell) -> bool {
        self(cell)
    }
}

/// Both predicates hold
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q>(P, Q);

impl<P: CellPredicate, Q: CellPredicate> CellPredicate for And<P, Q> {
    fn test(&self, cell: &Cell) -> bool {
        self.0.test(cell) && self.1.test(cell)
    }
}

/// Either predicate holds
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q>(P, Q);

impl<P: CellPredicate, Q: CellPredicate> CellPredicate for Or<P, Q> {
    fn test(&self, cell: &Cell) -> bool {
        self.0.test(cell) || self.1.test(cell)
    }
}

/// Negated predicate
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

impl<P: CellPredicate> CellPredicate for Not<P> {
    fn test(&self, cell: &Cell) -> bool {
        !self.0.test(cell)
    }
}

/// Cell is of exactly this type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsType(pub CellType);

impl CellPredicate for IsType {
    fn test(&self, cell: &Cell) -> bool {
        cell.typ == self.0
    }
}

pub const fn is_type(typ: CellType) -> IsType {
    IsType(typ)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversable;

impl CellPredicate for Traversable {
    fn test(&self, cell: &Cell) -> bool {
        cell.typ.is_traversable()
    }
}

pub const fn is_traversable() -> Traversable {
    Traversable
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked;

impl CellPredicate for Checked {
    fn test(&self, cell: &Cell) -> bool {
        cell.checked
    }
}

pub const fn is_checked() -> Checked {
    Checked
}

/// A pure transform of a single cell, returning the new value
pub trait CellModification {
    fn apply(&self, cell: Cell) -> Cell;

    /// Apply `self`, then `next` to the result
    fn and_then<M>(self, next: M) -> AndThen<Self, M>
    where
        Self: Sized,
        M: CellModification,
    {
        AndThen(self, next)
    }
}

impl<F> CellModification for F
where
    F: Fn(Cell) -> Cell,
{
    fn apply(&self, cell: Cell) -> Cell {
        self(cell)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndThen<M, N>(M, N);

impl<M: CellModification, N: CellModification> CellModification for AndThen<M, N> {
    fn apply(&self, cell: Cell) -> Cell {
        self.1.apply(self.0.apply(cell))
    }
}

/// Change the terrain type, keeping the scratch mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertTo(pub CellType);

impl CellModification for ConvertTo {
    fn apply(&self, cell: Cell) -> Cell {
        Cell {
            typ: self.0,
            ..cell
        }
    }
}

pub const fn convert_to(typ: CellType) -> ConvertTo {
    ConvertTo(typ)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkChecked;

impl CellModification for MarkChecked {
    fn apply(&self, cell: Cell) -> Cell {
        Cell {
            checked: true,
            ..cell
        }
    }
}

pub const fn mark_checked() -> MarkChecked {
    MarkChecked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearChecked;

impl CellModification for ClearChecked {
    fn apply(&self, cell: Cell) -> Cell {
        Cell {
            checked: false,
            ..cell
        }
    }
}

pub const fn clear_checked() -> ClearChecked {
    ClearChecked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_or_not() {
        let rock = Cell::new(CellType::SolidRock);
        let wall = Cell::new(CellType::Wall);
        let room = Cell::new(CellType::Room);

        let solid = is_type(CellType::SolidRock).or(is_type(CellType::Wall));
        assert!(solid.test(&rock));
        assert!(solid.test(&wall));
        assert!(!solid.test(&room));
        assert!(solid.not().test(&room));

        let open_unchecked = is_traversable().and(is_checked().not());
        assert!(open_unchecked.test(&room));
        assert!(!open_unchecked.test(&mark_checked().apply(room)));
    }

    #[test]
    fn test_closures_compose() {
        let is_room = |c: &Cell| c.typ == CellType::Room;
        let p = is_room.and(|c: &Cell| !c.checked);
        assert!(p.test(&Cell::new(CellType::Room)));
        assert!(!p.test(&Cell::new(CellType::Corridor)));
    }

    #[test]
    fn test_predicates_are_reusable() {
        let p = is_type(CellType::Wall).not();
        let q = p.and(is_traversable());
        // p is Copy and still usable after building q
        assert!(p.test(&Cell::new(CellType::Room)));
        assert!(q.test(&Cell::new(CellType::Room)));
        assert!(!q.test(&Cell::new(CellType::SolidRock)));
    }

    #[test]
    fn test_and_then_order() {
        let m = convert_to(CellType::Room).and_then(convert_to(CellType::Corridor));
        assert_eq!(m.apply(Cell::solid()).typ, CellType::Corridor);

        let checked_room = convert_to(CellType::Room).and_then(mark_checked());
        let cell = checked_room.apply(Cell::solid());
        assert_eq!(cell, Cell { typ: CellType::Room, checked: true });
        assert!(!clear_checked().apply(cell).checked);
    }

    #[test]
    fn test_convert_keeps_mark() {
        let cell = mark_checked().apply(Cell::solid());
        assert!(convert_to(CellType::Wall).apply(cell).checked);
    }
}
