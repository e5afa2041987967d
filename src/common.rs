//! Common types: coordinates and the core error enums.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ship::ShipType;

/// A cell on the field. Travels on the wire as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset, returning `None` on underflow.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<[usize; 2]> for Coordinate {
    fn from([x, y]: [usize; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [usize; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Errors returned by fleet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// Coordinate lies outside the field.
    OutOfBounds(Coordinate),
    /// Ship type is not part of this fleet.
    UnknownShip(ShipType),
    /// Ship has no endurance left.
    ShipDestroyed(ShipType),
    /// Ship already has a starting position.
    AlreadyPlaced(ShipType),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::OutOfBounds(c) => write!(f, "Coordinate {} is outside the field", c),
            FleetError::UnknownShip(t) => write!(f, "Ship {:?} is not part of the fleet", t),
            FleetError::ShipDestroyed(t) => write!(f, "Ship {:?} has been destroyed", t),
            FleetError::AlreadyPlaced(t) => write!(f, "Ship {:?} is already placed", t),
        }
    }
}

impl std::error::Error for FleetError {}

/// Errors returned by the placement planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No free cell was left for the named ship.
    Exhausted(ShipType),
    /// The fleet refused the chosen position.
    Fleet(FleetError),
}

impl From<FleetError> for PlacementError {
    fn from(err: FleetError) -> Self {
        PlacementError::Fleet(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Exhausted(t) => write!(f, "No free cell left to place {:?}", t),
            PlacementError::Fleet(e) => write!(f, "Fleet error: {}", e),
        }
    }
}

impl std::error::Error for PlacementError {}
