//! Own fleet bookkeeping and the capability interface the decision engine
//! drives it through.

use log::debug;

use crate::action::Action;
use crate::common::{Coordinate, FleetError};
use crate::config::{FIELD_SIZE, SHIPS};
use crate::protocol::Update;
use crate::ship::{Contact, Ship, ShipType};

/// Interface implemented by the rules-side fleet.
///
/// Placement, targeting and movement only talk to the fleet through this
/// trait, so tests can substitute a double with hand-picked state.
pub trait FleetApi: Send {
    /// Ship types this fleet is made of, in configuration order.
    fn roster(&self) -> Vec<ShipType>;

    /// Snapshot of our placed ships.
    fn ships(&self) -> &[Ship];

    /// Snapshot of what is known about the opponent's ships.
    fn contacts(&self) -> &[Contact];

    /// Record the starting position of a ship.
    fn place(&mut self, ship: ShipType, at: Coordinate) -> Result<(), FleetError>;

    /// Build an attack on `to`.
    fn attack(&mut self, to: Coordinate) -> Result<Action, FleetError>;

    /// Move `ship` to `to` and build the matching action.
    fn relocate(&mut self, ship: ShipType, to: Coordinate) -> Result<Action, FleetError>;

    /// Apply a server report to our view of both fleets.
    fn apply_update(&mut self, update: &Update);

    /// Which of our afloat ships occupies `at`.
    fn overlap(&self, at: Coordinate) -> Option<ShipType> {
        self.ships()
            .iter()
            .find(|s| s.is_afloat() && s.position == at)
            .map(|s| s.ship_type)
    }

    /// Which opponent ship was last seen at `at`.
    fn opponent_overlap(&self, at: Coordinate) -> Option<ShipType> {
        self.contacts()
            .iter()
            .find(|c| c.endurance > 0 && c.last_seen == Some(at))
            .map(|c| c.ship_type)
    }

    /// Known endurance of an opponent ship.
    fn opponent_endurance(&self, ship: ShipType) -> Option<u32> {
        self.contacts()
            .iter()
            .find(|c| c.ship_type == ship)
            .map(|c| c.endurance)
    }
}

/// Fleet following the standard rules: one ship per type on a square field,
/// synchronised from the `condition` block of every report.
#[derive(Debug, Clone)]
pub struct StandardFleet {
    side: usize,
    roster: Vec<ShipType>,
    ships: Vec<Ship>,
    contacts: Vec<Contact>,
}

impl StandardFleet {
    pub fn new(side: usize, roster: &[ShipType]) -> Self {
        Self {
            side,
            roster: roster.to_vec(),
            ships: Vec::with_capacity(roster.len()),
            contacts: roster.iter().map(|&t| Contact::new(t)).collect(),
        }
    }

    fn in_bounds(&self, c: Coordinate) -> Result<(), FleetError> {
        if c.x < self.side && c.y < self.side {
            Ok(())
        } else {
            Err(FleetError::OutOfBounds(c))
        }
    }

    fn contact_mut(&mut self, ship: ShipType) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.ship_type == ship)
    }
}

impl Default for StandardFleet {
    fn default() -> Self {
        Self::new(FIELD_SIZE, &SHIPS)
    }
}

impl FleetApi for StandardFleet {
    fn roster(&self) -> Vec<ShipType> {
        self.roster.clone()
    }

    fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn place(&mut self, ship: ShipType, at: Coordinate) -> Result<(), FleetError> {
        if !self.roster.contains(&ship) {
            return Err(FleetError::UnknownShip(ship));
        }
        if self.ships.iter().any(|s| s.ship_type == ship) {
            return Err(FleetError::AlreadyPlaced(ship));
        }
        self.in_bounds(at)?;
        self.ships.push(Ship::new(ship, at));
        Ok(())
    }

    fn attack(&mut self, to: Coordinate) -> Result<Action, FleetError> {
        self.in_bounds(to)?;
        Ok(Action::Attack(to))
    }

    fn relocate(&mut self, ship: ShipType, to: Coordinate) -> Result<Action, FleetError> {
        self.in_bounds(to)?;
        let entry = self
            .ships
            .iter_mut()
            .find(|s| s.ship_type == ship)
            .ok_or(FleetError::UnknownShip(ship))?;
        if !entry.is_afloat() {
            return Err(FleetError::ShipDestroyed(ship));
        }
        entry.position = to;
        Ok(Action::RelocateShip(ship, to))
    }

    fn apply_update(&mut self, update: &Update) {
        let report = update.report();
        let side = self.side;

        match update {
            Update::Own(_) => {
                if let Some(attacked) = report.attacked() {
                    if let Some(hit) = attacked.hit {
                        if let Some(contact) = self.contact_mut(hit) {
                            contact.last_seen = Some(attacked.position);
                        }
                    }
                }
            }
            Update::Opponent(_) => {
                if let Some(moved) = report.moved() {
                    if let Some(contact) = self.contact_mut(moved.ship) {
                        contact.last_seen = contact
                            .last_seen
                            .and_then(|c| c.offset(moved.distance[0], moved.distance[1]))
                            .filter(|c| c.x < side && c.y < side);
                    }
                }
            }
        }

        let Some(condition) = &report.condition else {
            return;
        };
        if let Some(me) = &condition.me {
            for ship in &mut self.ships {
                match me.get(&ship.ship_type) {
                    Some(status) => {
                        ship.endurance = status.hp;
                        ship.position = status.position;
                    }
                    None if ship.endurance > 0 => {
                        debug!("ship {:?} destroyed", ship.ship_type);
                        ship.endurance = 0;
                    }
                    None => {}
                }
            }
        }
        if let Some(enemy) = &condition.enemy {
            for contact in &mut self.contacts {
                contact.endurance = enemy.get(&contact.ship_type).map_or(0, |s| s.hp);
                if contact.endurance == 0 {
                    contact.last_seen = None;
                }
            }
        }
    }
}
