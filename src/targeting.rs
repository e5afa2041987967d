// Hunt/target selection: search around cells we already fired on or hit.
// Only candidates next to our own fire history are ever proposed.

use std::cmp::Reverse;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::Coordinate;
use crate::field::Field;
use crate::fleet::FleetApi;
use crate::opponent::OpponentModel;

/// In-bounds Moore neighbours of every attacked or hit coordinate, in history
/// order. Duplicates are kept.
pub fn candidates(field: &Field, model: &OpponentModel) -> Vec<Coordinate> {
    model
        .history()
        .flat_map(|seed| field.neighbours(seed))
        .collect()
}

/// Information-gathering pick: any candidate, uniformly.
pub fn scout<R: Rng + ?Sized>(
    field: &Field,
    model: &OpponentModel,
    rng: &mut R,
) -> Option<Coordinate> {
    candidates(field, model).choose(rng).copied()
}

/// Order candidates by the known endurance of the opponent ship each one
/// resolves to, highest first, and return the front.
///
/// The sort is stable, so equal endurance keeps history order. A candidate no
/// ship resolves to ranks below every resolved one.
pub fn prioritize<F: FleetApi + ?Sized>(
    mut candidates: Vec<Coordinate>,
    fleet: &F,
) -> Option<Coordinate> {
    candidates.sort_by_key(|&c| {
        Reverse(
            fleet
                .opponent_overlap(c)
                .and_then(|ship| fleet.opponent_endurance(ship)),
        )
    });
    candidates.first().copied()
}
