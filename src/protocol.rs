//! Line-oriented JSON wire format shared with the game server.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::action::Action;
use crate::common::Coordinate;
use crate::placement::Placement;
use crate::ship::ShipType;

pub const STATUS_YOUR_TURN: &str = "your turn";
pub const STATUS_WAITING: &str = "waiting";
pub const STATUS_WIN: &str = "you win";
pub const STATUS_LOSE: &str = "you lose";
pub const STATUS_EVEN: &str = "even";

/// Status line sent by the server at the top of every loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    YourTurn,
    Waiting,
    Win,
    Lose,
    Even,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::YourTurn => STATUS_YOUR_TURN,
            Status::Waiting => STATUS_WAITING,
            Status::Win => STATUS_WIN,
            Status::Lose => STATUS_LOSE,
            Status::Even => STATUS_EVEN,
        }
    }
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end() {
            STATUS_YOUR_TURN => Ok(Status::YourTurn),
            STATUS_WAITING => Ok(Status::Waiting),
            STATUS_WIN => Ok(Status::Win),
            STATUS_LOSE => Ok(Status::Lose),
            STATUS_EVEN => Ok(Status::Even),
            other => Err(ProtocolError::UnknownStatus(other.to_string())),
        }
    }
}

/// Violations of the wire contract. All of them end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownStatus(String),
    MalformedReport(String),
    MalformedAction(String),
    MalformedPlacement(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownStatus(s) => write!(f, "unknown status line: {:?}", s),
            ProtocolError::MalformedReport(e) => write!(f, "malformed report: {}", e),
            ProtocolError::MalformedAction(e) => write!(f, "malformed action: {}", e),
            ProtocolError::MalformedPlacement(e) => write!(f, "malformed placement: {}", e),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Outcome of the action a report describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacked: Option<Attacked>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<Moved>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacked {
    pub position: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit: Option<ShipType>,
    #[serde(default)]
    pub near: Vec<ShipType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moved {
    pub ship: ShipType,
    pub distance: [isize; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStatus {
    pub hp: u32,
    pub position: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStatus {
    pub hp: u32,
}

/// Surviving ships on both sides. Ships absent from a map are destroyed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me: Option<BTreeMap<ShipType, ShipStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy: Option<BTreeMap<ShipType, EnemyStatus>>,
}

/// A JSON line describing the result of an action, ours or the opponent's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ActionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Report {
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(line).map_err(|e| ProtocolError::MalformedReport(e.to_string()))
    }

    pub fn to_line(&self) -> String {
        // Only derived fields with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn attacked(&self) -> Option<&Attacked> {
        self.result.as_ref().and_then(|r| r.attacked.as_ref())
    }

    pub fn moved(&self) -> Option<&Moved> {
        self.result.as_ref().and_then(|r| r.moved.as_ref())
    }

    /// Coordinate of the attack this report describes, if it hit a ship.
    pub fn hit(&self) -> Option<Coordinate> {
        self.attacked()
            .filter(|a| a.hit.is_some())
            .map(|a| a.position)
    }
}

/// A report tagged with who acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Reply to our own action.
    Own(Report),
    /// The opponent's action, read after `waiting`.
    Opponent(Report),
}

impl Update {
    pub fn report(&self) -> &Report {
        match self {
            Update::Own(r) | Update::Opponent(r) => r,
        }
    }
}

/// Encode an action as a single JSON line (without the newline).
pub fn encode_action(action: &Action) -> String {
    let value = match action {
        Action::FirstMove => json!({ "move": "first_move" }),
        Action::Attack(to) => json!({ "attack": { "to": [to.x, to.y] } }),
        Action::RelocateShip(ship, to) => {
            json!({ "move": { "ship": ship.code(), "to": [to.x, to.y] } })
        }
        Action::NoAction => json!({ "pass": {} }),
    };
    value.to_string()
}

/// Decode an action line produced by [`encode_action`].
pub fn decode_action(line: &str) -> Result<Action, ProtocolError> {
    let malformed = || ProtocolError::MalformedAction(line.trim_end().to_string());
    let value: Value =
        serde_json::from_str(line).map_err(|e| ProtocolError::MalformedAction(e.to_string()))?;
    if let Some(attack) = value.get("attack") {
        let to: Coordinate =
            serde_json::from_value(attack.get("to").cloned().ok_or_else(malformed)?)
                .map_err(|_| malformed())?;
        return Ok(Action::Attack(to));
    }
    match value.get("move") {
        Some(Value::String(s)) if s == "first_move" => Ok(Action::FirstMove),
        Some(mv @ Value::Object(_)) => {
            let ship: ShipType =
                serde_json::from_value(mv.get("ship").cloned().ok_or_else(malformed)?)
                    .map_err(|_| malformed())?;
            let to: Coordinate =
                serde_json::from_value(mv.get("to").cloned().ok_or_else(malformed)?)
                    .map_err(|_| malformed())?;
            Ok(Action::RelocateShip(ship, to))
        }
        Some(_) => Err(malformed()),
        None if value.get("pass").is_some() => Ok(Action::NoAction),
        None => Err(malformed()),
    }
}

/// Encode a placement as `{"w": [x, y], ...}`.
pub fn encode_placement(placement: &Placement) -> String {
    serde_json::to_string(placement).unwrap_or_else(|_| String::from("{}"))
}

pub fn decode_placement(line: &str) -> Result<Placement, ProtocolError> {
    serde_json::from_str(line).map_err(|e| ProtocolError::MalformedPlacement(e.to_string()))
}
