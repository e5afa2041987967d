//! Commonly used types and utilities for ease of import.

pub use crate::{
    Action, Coordinate, Field, FleetApi, GameStatus, OpponentModel, Session, ShipType,
    StandardFleet, TurnController,
};

pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
