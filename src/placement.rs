//! Random starting positions for our fleet.

use std::collections::BTreeMap;

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::common::{Coordinate, PlacementError};
use crate::field::Field;
use crate::fleet::FleetApi;
use crate::ship::ShipType;

/// Draws per ship before giving up on finding a cell no ship overlaps.
const MAX_DRAWS: usize = 100;

/// Starting coordinate of every ship, keyed by type.
pub type Placement = BTreeMap<ShipType, Coordinate>;

/// Place every ship of `fleet` on a distinct free cell of `field`.
///
/// Ship types are processed in shuffled order. Each draw is uniform over the
/// cells still free and is rejected while the fleet reports an overlap there.
pub fn plan<F, R>(field: &mut Field, fleet: &mut F, rng: &mut R) -> Result<Placement, PlacementError>
where
    F: FleetApi + ?Sized,
    R: Rng + ?Sized,
{
    let mut order = fleet.roster();
    order.shuffle(rng);

    let mut placement = Placement::new();
    for ship in order {
        let mut draws = 0;
        let at = loop {
            let &candidate = field
                .free_cells()
                .choose(rng)
                .ok_or(PlacementError::Exhausted(ship))?;
            if fleet.overlap(candidate).is_none() {
                break candidate;
            }
            draws += 1;
            if draws >= MAX_DRAWS {
                return Err(PlacementError::Exhausted(ship));
            }
        };
        fleet.place(ship, at)?;
        field.claim(at);
        debug!("placed {:?} at {}", ship, at);
        placement.insert(ship, at);
    }
    Ok(placement)
}
