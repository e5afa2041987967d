//! Drives one game against the server: greeting, placement, then the
//! status-line loop until a terminal token arrives.

use log::{debug, info};

use crate::controller::TurnController;
use crate::fleet::FleetApi;
use crate::protocol::{self, Report, Status, Update};
use crate::transport::Transport;

/// Where the session stands in the server conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGreeting,
    Placed,
    YourTurn,
    Waiting,
    Terminal(GameStatus),
}

/// Result of a game as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Even,
}

pub struct Session<F: FleetApi> {
    controller: TurnController<F>,
    transport: Box<dyn Transport>,
    state: SessionState,
}

impl<F: FleetApi> Session<F> {
    pub fn new(controller: TurnController<F>, transport: Box<dyn Transport>) -> Self {
        Self {
            controller,
            transport,
            state: SessionState::AwaitingGreeting,
        }
    }

    /// Play until the server sends a terminal status.
    pub async fn run(&mut self) -> anyhow::Result<GameStatus> {
        let greeting = self.transport.recv().await?;
        info!("{}", greeting);

        let placement = self
            .controller
            .place()
            .map_err(|e| anyhow::anyhow!(e))?;
        self.transport
            .send(&protocol::encode_placement(&placement))
            .await?;
        self.state = SessionState::Placed;

        loop {
            let line = self.transport.recv().await?;
            debug!("status: {}", line);
            match line.parse::<Status>()? {
                Status::YourTurn => {
                    self.state = SessionState::YourTurn;
                    let action = self
                        .controller
                        .take_turn()
                        .map_err(|e| anyhow::anyhow!(e))?;
                    self.transport.send(&protocol::encode_action(&action)).await?;
                    let reply = self.transport.recv().await?;
                    let report = Report::parse(&reply)?;
                    self.controller.observe(Update::Own(report));
                }
                Status::Waiting => {
                    self.state = SessionState::Waiting;
                    let reply = self.transport.recv().await?;
                    let report = Report::parse(&reply)?;
                    self.controller.observe(Update::Opponent(report));
                }
                Status::Win => return Ok(self.finish(GameStatus::Won)),
                Status::Lose => return Ok(self.finish(GameStatus::Lost)),
                Status::Even => return Ok(self.finish(GameStatus::Even)),
            }
        }
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        info!("game over after {} turns: {:?}", self.controller.turn() - 1, status);
        self.state = SessionState::Terminal(status);
        status
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Final result, or `InProgress` while the game runs.
    pub fn status(&self) -> GameStatus {
        match self.state {
            SessionState::Terminal(status) => status,
            _ => GameStatus::InProgress,
        }
    }

    pub fn controller(&self) -> &TurnController<F> {
        &self.controller
    }
}
