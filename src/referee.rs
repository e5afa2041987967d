//! A local game server for two players, used by the `sim` binary and the
//! end-to-end tests.
//!
//! Rules enforced here are deliberately small: attacks may target any cell on
//! the field, a hit costs the ship one endurance point, and a ship may move to
//! any in-bounds cell not held by a ship of its own fleet. Malformed or
//! illegal actions forfeit the turn.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::action::Action;
use crate::common::Coordinate;
use crate::config::{DEFAULT_MAX_TURNS, FIELD_SIZE, SHIPS};
use crate::protocol::{
    self, ActionResult, Attacked, Condition, EnemyStatus, Moved, Report, ShipStatus, Status,
};
use crate::session::GameStatus;
use crate::ship::{Ship, ShipType};
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct RefereeConfig {
    pub side: usize,
    pub roster: Vec<ShipType>,
    pub max_turns: u32,
    pub greeting: String,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            side: FIELD_SIZE,
            roster: SHIPS.to_vec(),
            max_turns: DEFAULT_MAX_TURNS,
            greeting: String::from("welcome to the battle, send your placement"),
        }
    }
}

/// Afloat ships of one player.
#[derive(Debug, Clone, Default)]
struct Board {
    ships: BTreeMap<ShipType, Ship>,
}

impl Board {
    fn condition(&self) -> BTreeMap<ShipType, ShipStatus> {
        self.ships
            .values()
            .map(|s| {
                (
                    s.ship_type,
                    ShipStatus {
                        hp: s.endurance,
                        position: s.position,
                    },
                )
            })
            .collect()
    }

    fn enemy_view(&self) -> BTreeMap<ShipType, EnemyStatus> {
        self.ships
            .values()
            .map(|s| (s.ship_type, EnemyStatus { hp: s.endurance }))
            .collect()
    }

    fn occupant(&self, at: Coordinate) -> Option<ShipType> {
        self.ships
            .values()
            .find(|s| s.position == at)
            .map(|s| s.ship_type)
    }

    fn is_defeated(&self) -> bool {
        self.ships.is_empty()
    }
}

fn chebyshev(a: Coordinate, b: Coordinate) -> usize {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

pub struct Referee {
    config: RefereeConfig,
    players: [Box<dyn Transport>; 2],
    boards: [Board; 2],
}

impl Referee {
    pub fn new(config: RefereeConfig, first: Box<dyn Transport>, second: Box<dyn Transport>) -> Self {
        Self {
            config,
            players: [first, second],
            boards: [Board::default(), Board::default()],
        }
    }

    /// Run a full game and return each player's result.
    pub async fn run(&mut self) -> anyhow::Result<[GameStatus; 2]> {
        for player in self.players.iter_mut() {
            player.send(&self.config.greeting).await?;
        }

        let mut valid = [false; 2];
        for i in 0..2 {
            let line = self.players[i].recv().await?;
            match self.read_placement(&line) {
                Ok(board) => {
                    self.boards[i] = board;
                    valid[i] = true;
                }
                Err(reason) => warn!("player {} placement rejected: {}", i, reason),
            }
        }
        match valid {
            [true, true] => {}
            [true, false] => return self.conclude(Some(0)).await,
            [false, true] => return self.conclude(Some(1)).await,
            [false, false] => return self.conclude(None).await,
        }

        let mut active = 0;
        for turn in 1..=self.config.max_turns {
            let passive = 1 - active;
            self.players[active].send(Status::YourTurn.as_str()).await?;
            self.players[passive].send(Status::Waiting.as_str()).await?;

            let line = self.players[active].recv().await?;
            let result = match protocol::decode_action(&line) {
                Ok(action) => {
                    debug!("turn {}: player {} plays {:?}", turn, active, action);
                    self.apply(active, action)
                }
                Err(e) => {
                    warn!("player {} sent {}; turn forfeited", active, e);
                    ActionResult::default()
                }
            };

            for i in 0..2 {
                let report = Report {
                    result: Some(result.clone()),
                    condition: Some(self.condition_for(i)),
                };
                self.players[i].send(&report.to_line()).await?;
            }

            if self.boards[passive].is_defeated() {
                info!("player {} wins on turn {}", active, turn);
                return self.conclude(Some(active)).await;
            }
            active = passive;
        }

        info!("turn limit of {} reached", self.config.max_turns);
        self.conclude(None).await
    }

    fn read_placement(&self, line: &str) -> Result<Board, String> {
        let placement = protocol::decode_placement(line).map_err(|e| e.to_string())?;
        let mut board = Board::default();
        for &ship in &self.config.roster {
            let at = *placement
                .get(&ship)
                .ok_or_else(|| format!("missing ship {:?}", ship))?;
            if at.x >= self.config.side || at.y >= self.config.side {
                return Err(format!("{:?} placed outside the field at {}", ship, at));
            }
            if let Some(other) = board.occupant(at) {
                return Err(format!("{:?} overlaps {:?} at {}", ship, other, at));
            }
            board.ships.insert(ship, Ship::new(ship, at));
        }
        if placement.len() != self.config.roster.len() {
            return Err(String::from("placement names ships outside the roster"));
        }
        Ok(board)
    }

    fn apply(&mut self, player: usize, action: Action) -> ActionResult {
        let side = self.config.side;
        match action {
            Action::FirstMove | Action::NoAction => ActionResult::default(),
            Action::Attack(to) => {
                if to.x >= side || to.y >= side {
                    warn!("player {} attacked outside the field at {}", player, to);
                    return ActionResult::default();
                }
                let target = &mut self.boards[1 - player];
                let hit = target.occupant(to);
                if let Some(ship) = hit {
                    let sunk = match target.ships.get_mut(&ship) {
                        Some(s) => {
                            s.endurance = s.endurance.saturating_sub(1);
                            s.endurance == 0
                        }
                        None => false,
                    };
                    if sunk {
                        target.ships.remove(&ship);
                    }
                }
                let near = target
                    .ships
                    .values()
                    .filter(|s| chebyshev(s.position, to) == 1)
                    .map(|s| s.ship_type)
                    .collect();
                ActionResult {
                    attacked: Some(Attacked {
                        position: to,
                        hit,
                        near,
                    }),
                    moved: None,
                }
            }
            Action::RelocateShip(ship, to) => {
                let own = &mut self.boards[player];
                let blocked = own.occupant(to).is_some_and(|other| other != ship);
                let Some(entry) = own.ships.get_mut(&ship) else {
                    warn!("player {} moved missing ship {:?}", player, ship);
                    return ActionResult::default();
                };
                if to.x >= side || to.y >= side || blocked {
                    warn!("player {} made an illegal move of {:?} to {}", player, ship, to);
                    return ActionResult::default();
                }
                let distance = [
                    to.x as isize - entry.position.x as isize,
                    to.y as isize - entry.position.y as isize,
                ];
                entry.position = to;
                ActionResult {
                    attacked: None,
                    moved: Some(Moved { ship, distance }),
                }
            }
        }
    }

    fn condition_for(&self, player: usize) -> Condition {
        Condition {
            me: Some(self.boards[player].condition()),
            enemy: Some(self.boards[1 - player].enemy_view()),
        }
    }

    async fn conclude(&mut self, winner: Option<usize>) -> anyhow::Result<[GameStatus; 2]> {
        let statuses = match winner {
            Some(0) => [GameStatus::Won, GameStatus::Lost],
            Some(_) => [GameStatus::Lost, GameStatus::Won],
            None => [GameStatus::Even, GameStatus::Even],
        };
        for (player, status) in self.players.iter_mut().zip(statuses) {
            let token = match status {
                GameStatus::Won => Status::Win,
                GameStatus::Lost => Status::Lose,
                _ => Status::Even,
            };
            player.send(token.as_str()).await?;
        }
        Ok(statuses)
    }
}
