use crate::common::Coordinate;
use crate::ship::ShipType;

/// What the player does on its turn. Converted to a wire line by
/// [`crate::protocol::encode_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Claim the move order on turn 1.
    FirstMove,
    /// Fire at a coordinate on the opponent field.
    Attack(Coordinate),
    /// Move one of our ships to a new cell.
    RelocateShip(ShipType, Coordinate),
    /// Nothing worth doing this turn; sent as an explicit pass.
    NoAction,
}

impl Action {
    /// Attack target, if this is an attack.
    pub fn target(&self) -> Option<Coordinate> {
        match self {
            Action::Attack(to) => Some(*to),
            _ => None,
        }
    }
}
