use crate::ship::ShipType;

/// Side length of the standard field.
pub const FIELD_SIZE: usize = 5;
pub const NUM_SHIPS: usize = 3;
pub const SHIPS: [ShipType; NUM_SHIPS] = [ShipType::Warship, ShipType::Carrier, ShipType::Submarine];

/// Longest line either side will accept (1 MB).
pub const MAX_LINE_LEN: usize = 1_000_000;

/// Turns played by the local referee before declaring a draw.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV: &str = "STRATEGIST_LOG";
