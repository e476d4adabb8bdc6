use std::collections::{HashSet, VecDeque};

use Direction::*;

/// A position on the grid. Signed, so a step past the border is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Up),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            _ => None,
        }
    }
}

/// The snake's occupied cells, head at the front and tail at the back.
///
/// Callers keep it at two cells or more; `head` and `second` index into it
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    /// A horizontal snake of `len` cells ending at `head`, facing right.
    pub fn horizontal(head: Cell, len: usize) -> Self {
        let cells = (0..len as i32)
            .map(|i| Cell::new(head.x - i, head.y))
            .collect();
        Body { cells }
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        Body { cells: cells.into_iter().collect() }
    }

    /// Inserts a new head. No validation happens here.
    pub fn prepend(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    pub fn trim_tail(&mut self) -> Option<Cell> {
        self.cells.pop_back()
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// The neck: the cell directly behind the head.
    pub fn second(&self) -> Cell {
        self.cells[1]
    }

    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, cell: Cell, excluding_head: bool) -> bool {
        let skip = if excluding_head { 1 } else { 0 };
        self.cells.iter().skip(skip).any(|c| *c == cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Direction from the neck to the head, `None` while the two are not
    /// adjacent (e.g. after a permissive move into the body).
    pub fn heading(&self) -> Option<Direction> {
        let (head, neck) = (self.head(), self.second());
        Direction::from_delta(head.x - neck.x, head.y - neck.y)
    }

    /// True when any two cells share a position
    pub fn has_overlap(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.cells.len());
        self.cells.iter().any(|c| !seen.insert(*c))
    }

    /// True when every cell lies inside the inclusive box `min..=max`
    pub fn is_within(&self, min: Cell, max: Cell) -> bool {
        self.cells
            .iter()
            .all(|c| c.x >= min.x && c.x <= max.x && c.y >= min.y && c.y <= max.y)
    }
}
