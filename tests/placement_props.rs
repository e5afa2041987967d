use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use strategist::{
    placement, Field, FleetApi, PlacementError, ShipType, StandardFleet, FIELD_SIZE, SHIPS,
};

fn assert_valid(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut field = Field::default();
    let mut fleet = StandardFleet::default();
    let placement = placement::plan(&mut field, &mut fleet, &mut rng).unwrap();

    assert_eq!(placement.len(), SHIPS.len());
    let cells: HashSet<_> = placement.values().copied().collect();
    assert_eq!(cells.len(), SHIPS.len(), "collision for seed {}", seed);
    for c in placement.values() {
        assert!(c.x < FIELD_SIZE && c.y < FIELD_SIZE);
    }
    assert_eq!(field.free_cells().len(), FIELD_SIZE * FIELD_SIZE - SHIPS.len());
    for ship in fleet.ships() {
        assert_eq!(placement[&ship.ship_type], ship.position);
    }
}

#[test]
fn ten_thousand_seeds_never_collide() {
    for seed in 0..10_000 {
        assert_valid(seed);
    }
}

#[test]
fn same_seed_same_placement() {
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        placement::plan(&mut Field::default(), &mut StandardFleet::default(), &mut rng).unwrap()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn fleet_larger_than_field_is_exhausted() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut field = Field::new(1);
    let mut fleet = StandardFleet::new(1, &[ShipType::Warship, ShipType::Carrier]);
    let err = placement::plan(&mut field, &mut fleet, &mut rng).unwrap_err();
    assert!(matches!(err, PlacementError::Exhausted(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_seed_fills_every_small_field(seed in any::<u64>(), side in 2usize..8) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = Field::new(side);
        let mut fleet = StandardFleet::new(side, &SHIPS);
        let placement = placement::plan(&mut field, &mut fleet, &mut rng).unwrap();
        let cells: HashSet<_> = placement.values().copied().collect();
        prop_assert_eq!(cells.len(), SHIPS.len());
        prop_assert!(placement.values().all(|c| field.contains(*c)));
    }
}
