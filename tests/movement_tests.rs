use rand::{rngs::SmallRng, SeedableRng};
use strategist::{movement, Coordinate, Field, OpponentModel, Ship, ShipType};

#[test]
fn boxed_in_corner_ship_stays_put() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    for (x, y) in [(0, 1), (1, 0), (1, 1)] {
        model.record_attack(Coordinate::new(x, y));
    }
    let ship = Ship::new(ShipType::Warship, Coordinate::new(0, 0));
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        movement::destination(&field, &ship, &model, &mut rng),
        Coordinate::new(0, 0)
    );
}

#[test]
fn destination_avoids_attacked_cells() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    model.record_attack(Coordinate::new(1, 1));
    model.record_attack(Coordinate::new(2, 1));
    let ship = Ship::new(ShipType::Carrier, Coordinate::new(2, 2));
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let to = movement::destination(&field, &ship, &model, &mut rng);
        assert!(!model.was_attacked(to));
        assert!(to.x.abs_diff(2) <= 1 && to.y.abs_diff(2) <= 1);
        assert_ne!(to, ship.position);
    }
}

#[test]
fn destroyed_and_attacked_ships_do_not_move() {
    let field = Field::new(5);
    let mut model = OpponentModel::new();
    model.record_attack(Coordinate::new(4, 4));
    let mut sunk = Ship::new(ShipType::Warship, Coordinate::new(0, 0));
    sunk.endurance = 0;
    let ships = [
        sunk,
        Ship::new(ShipType::Carrier, Coordinate::new(4, 4)),
        Ship::new(ShipType::Submarine, Coordinate::new(2, 2)),
    ];
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (ship, _) = movement::plan(&field, &ships, &model, &mut rng).unwrap();
        assert_eq!(ship, ShipType::Submarine);
    }

    let stuck = [sunk, Ship::new(ShipType::Carrier, Coordinate::new(4, 4))];
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(movement::plan(&field, &stuck, &model, &mut rng), None);
}
