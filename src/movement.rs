//! Evasive relocation of one of our own ships.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::Coordinate;
use crate::field::Field;
use crate::opponent::OpponentModel;
use crate::ship::{Ship, ShipType};

/// Pick an afloat ship whose cell we have not fired on, uniformly.
pub fn moveable_ship<'a, R: Rng + ?Sized>(
    ships: &'a [Ship],
    model: &OpponentModel,
    rng: &mut R,
) -> Option<&'a Ship> {
    let moveable: Vec<&Ship> = ships
        .iter()
        .filter(|s| s.is_afloat() && !model.was_attacked(s.position))
        .collect();
    moveable.choose(rng).copied()
}

/// Pick a neighbouring cell outside our fire history, or stay put.
///
/// Other own ships are not considered; the server decides whether the cell
/// can be entered.
pub fn destination<R: Rng + ?Sized>(
    field: &Field,
    ship: &Ship,
    model: &OpponentModel,
    rng: &mut R,
) -> Coordinate {
    let options: Vec<Coordinate> = field
        .neighbours(ship.position)
        .filter(|c| !model.was_attacked(*c))
        .collect();
    options.choose(rng).copied().unwrap_or(ship.position)
}

/// Choose which ship to move and where. `None` when no ship qualifies.
pub fn plan<R: Rng + ?Sized>(
    field: &Field,
    ships: &[Ship],
    model: &OpponentModel,
    rng: &mut R,
) -> Option<(ShipType, Coordinate)> {
    let ship = moveable_ship(ships, model, rng)?;
    let to = destination(field, ship, model, rng);
    Some((ship.ship_type, to))
}
