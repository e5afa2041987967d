mod action;
mod common;
mod config;
mod controller;
mod field;
mod fleet;
mod logging;
pub mod movement;
mod opponent;
pub mod prelude;
pub mod placement;
pub mod protocol;
pub mod referee;
mod session;
mod ship;
pub mod targeting;
pub mod transport;

pub use action::Action;
pub use common::*;
pub use config::*;
pub use controller::TurnController;
pub use field::Field;
pub use fleet::{FleetApi, StandardFleet};
pub use logging::init_logging;
pub use opponent::OpponentModel;
pub use placement::Placement;
pub use protocol::{ProtocolError, Report, Status, Update};
pub use referee::{Referee, RefereeConfig};
pub use session::{GameStatus, Session, SessionState};
pub use ship::*;
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
