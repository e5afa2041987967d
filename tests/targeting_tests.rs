use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use strategist::{
    targeting, Action, Contact, Coordinate, Field, FleetApi, FleetError, OpponentModel, Ship,
    ShipType, Update,
};

/// Fleet double exposing hand-picked opponent contacts.
struct DoubleFleet {
    contacts: Vec<Contact>,
}

impl FleetApi for DoubleFleet {
    fn roster(&self) -> Vec<ShipType> {
        Vec::new()
    }
    fn ships(&self) -> &[Ship] {
        &[]
    }
    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
    fn place(&mut self, _ship: ShipType, _at: Coordinate) -> Result<(), FleetError> {
        Ok(())
    }
    fn attack(&mut self, to: Coordinate) -> Result<Action, FleetError> {
        Ok(Action::Attack(to))
    }
    fn relocate(&mut self, ship: ShipType, to: Coordinate) -> Result<Action, FleetError> {
        Ok(Action::RelocateShip(ship, to))
    }
    fn apply_update(&mut self, _update: &Update) {}
}

fn sorted(mut v: Vec<Coordinate>) -> Vec<Coordinate> {
    v.sort();
    v
}

#[test]
fn expansion_around_centre_is_the_eight_neighbours() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    model.record_attack(Coordinate::new(2, 2));
    let got = sorted(targeting::candidates(&field, &model));
    let mut want = Vec::new();
    for x in 1..=3 {
        for y in 1..=3 {
            if (x, y) != (2, 2) {
                want.push(Coordinate::new(x, y));
            }
        }
    }
    assert_eq!(got, want);
}

#[test]
fn expansion_around_corner_stays_in_bounds() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    model.record_attack(Coordinate::new(0, 0));
    assert_eq!(
        sorted(targeting::candidates(&field, &model)),
        vec![Coordinate::new(0, 1), Coordinate::new(1, 0), Coordinate::new(1, 1)]
    );
}

#[test]
fn empty_history_yields_no_candidates() {
    let field = Field::new(5);
    let model = OpponentModel::new();
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(targeting::candidates(&field, &model).is_empty());
    assert_eq!(targeting::scout(&field, &model, &mut rng), None);
}

#[test]
fn repeated_attacks_repeat_candidates() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    model.record_attack(Coordinate::new(0, 0));
    model.record_attack(Coordinate::new(0, 0));
    model.record_hit(Coordinate::new(0, 0));
    assert_eq!(targeting::candidates(&field, &model).len(), 9);
}

#[test]
fn priority_prefers_highest_known_endurance() {
    let fleet = DoubleFleet {
        contacts: vec![
            Contact {
                ship_type: ShipType::Carrier,
                endurance: 2,
                last_seen: Some(Coordinate::new(1, 1)),
            },
            Contact {
                ship_type: ShipType::Warship,
                endurance: 5,
                last_seen: Some(Coordinate::new(2, 2)),
            },
        ],
    };
    let candidates = vec![Coordinate::new(1, 1), Coordinate::new(2, 2)];
    assert_eq!(
        targeting::prioritize(candidates, &fleet),
        Some(Coordinate::new(2, 2))
    );
}

#[test]
fn priority_keeps_history_order_among_unresolved() {
    let fleet = DoubleFleet {
        contacts: vec![Contact {
            ship_type: ShipType::Submarine,
            endurance: 1,
            last_seen: Some(Coordinate::new(4, 4)),
        }],
    };
    let candidates = vec![
        Coordinate::new(3, 3),
        Coordinate::new(0, 1),
        Coordinate::new(4, 4),
    ];
    assert_eq!(
        targeting::prioritize(candidates.clone(), &fleet),
        Some(Coordinate::new(4, 4))
    );
    let no_contacts = DoubleFleet { contacts: vec![] };
    assert_eq!(
        targeting::prioritize(candidates, &no_contacts),
        Some(Coordinate::new(3, 3))
    );
    assert_eq!(targeting::prioritize(Vec::new(), &no_contacts), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn candidates_are_always_in_bounds(
        side in 1usize..10,
        history in prop::collection::vec((0usize..10, 0usize..10), 0..20),
        seed in any::<u64>(),
    ) {
        let field = Field::new(side);
        let mut model = OpponentModel::new();
        for (x, y) in history {
            model.record_attack(Coordinate::new(x % side, y % side));
        }
        for c in targeting::candidates(&field, &model) {
            prop_assert!(c.x < side && c.y < side);
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Some(c) = targeting::scout(&field, &model, &mut rng) {
            prop_assert!(field.contains(c));
        }
    }
}
