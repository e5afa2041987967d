//! Per-turn dispatch: first move, then attacks, then evasive moves.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::action::Action;
use crate::common::{Coordinate, FleetError, PlacementError};
use crate::field::Field;
use crate::fleet::FleetApi;
use crate::movement;
use crate::opponent::OpponentModel;
use crate::placement::{self, Placement};
use crate::protocol::Update;
use crate::targeting;

/// Owns the opponent model, the turn counter and the random generator, and
/// decides what the fleet does each turn.
pub struct TurnController<F: FleetApi> {
    field: Field,
    fleet: F,
    opponent: OpponentModel,
    turn: u32,
    rng: SmallRng,
}

impl<F: FleetApi> TurnController<F> {
    pub fn new(field: Field, fleet: F, rng: SmallRng) -> Self {
        Self {
            field,
            fleet,
            opponent: OpponentModel::new(),
            turn: 1,
            rng,
        }
    }

    /// Controller whose generator is seeded with `seed`.
    pub fn with_seed(field: Field, fleet: F, seed: u64) -> Self {
        Self::new(field, fleet, SmallRng::seed_from_u64(seed))
    }

    /// Choose starting positions for the whole fleet.
    pub fn place(&mut self) -> Result<Placement, PlacementError> {
        placement::plan(&mut self.field, &mut self.fleet, &mut self.rng)
    }

    /// Decide this turn's action and advance the turn counter.
    pub fn take_turn(&mut self) -> Result<Action, FleetError> {
        let action = self.decide()?;
        debug!("turn {}: {:?}", self.turn, action);
        self.turn += 1;
        Ok(action)
    }

    fn decide(&mut self) -> Result<Action, FleetError> {
        if self.turn == 1 {
            return Ok(Action::FirstMove);
        }

        if self.turn == 2 {
            if let Some(to) = targeting::scout(&self.field, &self.opponent, &mut self.rng) {
                return self.fire(to);
            }
        }

        let candidates = targeting::candidates(&self.field, &self.opponent);
        if let Some(to) = targeting::prioritize(candidates, &self.fleet) {
            return self.fire(to);
        }

        match movement::plan(&self.field, self.fleet.ships(), &self.opponent, &mut self.rng) {
            Some((ship, to)) => self.fleet.relocate(ship, to),
            None => {
                info!("turn {}: no target and no moveable ship, passing", self.turn);
                Ok(Action::NoAction)
            }
        }
    }

    fn fire(&mut self, to: Coordinate) -> Result<Action, FleetError> {
        let action = self.fleet.attack(to)?;
        self.opponent.record_attack(to);
        Ok(action)
    }

    /// Feed a server report back into the model and the fleet.
    pub fn observe(&mut self, update: Update) {
        if let Update::Own(report) = &update {
            if let Some(hit) = report.hit() {
                info!("hit at {}", hit);
                self.opponent.record_hit(hit);
            }
        }
        self.fleet.apply_update(&update);
    }

    /// Number of the next turn to be played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn fleet(&self) -> &F {
        &self.fleet
    }

    pub fn opponent(&self) -> &OpponentModel {
        &self.opponent
    }

    pub fn opponent_mut(&mut self) -> &mut OpponentModel {
        &mut self.opponent
    }
}
