//! The square playing field and its free-cell bookkeeping during placement.

use crate::common::Coordinate;
use crate::config::FIELD_SIZE;

/// Offsets of the eight Moore neighbours, row by row.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An N×N field. `free` lists the cells no ship has claimed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    side: usize,
    free: Vec<Coordinate>,
}

impl Field {
    /// Create a field of the given side with every cell free.
    pub fn new(side: usize) -> Self {
        let free = (0..side)
            .flat_map(|x| (0..side).map(move |y| Coordinate::new(x, y)))
            .collect();
        Self { side, free }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x < self.side && c.y < self.side
    }

    /// In-bounds Moore neighbours of `c`, excluding `c` itself.
    pub fn neighbours(&self, c: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| c.offset(dx, dy))
            .filter(move |n| self.contains(*n))
    }

    /// Cells not yet claimed by a ship.
    pub fn free_cells(&self) -> &[Coordinate] {
        &self.free
    }

    /// Mark `c` as taken. Returns `false` if it was not free.
    pub fn claim(&mut self, c: Coordinate) -> bool {
        match self.free.iter().position(|f| *f == c) {
            Some(idx) => {
                self.free.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_SIZE)
    }
}
