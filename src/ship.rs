//! Ship definitions: the three ship types, own ships and opponent contacts.

use serde::{Deserialize, Serialize};

use crate::common::Coordinate;

/// Type of ship. One of each per fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipType {
    #[serde(rename = "w")]
    Warship,
    #[serde(rename = "c")]
    Carrier,
    #[serde(rename = "s")]
    Submarine,
}

impl ShipType {
    /// Endurance a freshly placed ship starts with.
    pub const fn max_endurance(self) -> u32 {
        match self {
            ShipType::Warship => 3,
            ShipType::Carrier => 2,
            ShipType::Submarine => 1,
        }
    }

    /// Single-letter wire code.
    pub const fn code(self) -> &'static str {
        match self {
            ShipType::Warship => "w",
            ShipType::Carrier => "c",
            ShipType::Submarine => "s",
        }
    }
}

/// One of our own ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub ship_type: ShipType,
    pub position: Coordinate,
    pub endurance: u32,
}

impl Ship {
    pub fn new(ship_type: ShipType, position: Coordinate) -> Self {
        Self {
            ship_type,
            position,
            endurance: ship_type.max_endurance(),
        }
    }

    pub fn is_afloat(&self) -> bool {
        self.endurance > 0
    }
}

/// What we know about an opponent ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub ship_type: ShipType,
    pub endurance: u32,
    /// Where we last hit it, shifted by any moves the opponent reported since.
    pub last_seen: Option<Coordinate>,
}

impl Contact {
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            endurance: ship_type.max_endurance(),
            last_seen: None,
        }
    }
}
