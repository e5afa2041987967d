use crate::common::Coordinate;

/// History of our fire against the opponent.
///
/// Both sequences only grow and keep duplicates: attacking the same cell
/// twice appears twice, and its neighbours are proposed twice as candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentModel {
    attacked_by_us: Vec<Coordinate>,
    confirmed_hits: Vec<Coordinate>,
}

impl OpponentModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attack(&mut self, at: Coordinate) {
        self.attacked_by_us.push(at);
    }

    pub fn record_hit(&mut self, at: Coordinate) {
        self.confirmed_hits.push(at);
    }

    /// Every coordinate we fired on, in attack order.
    pub fn attacked_by_us(&self) -> &[Coordinate] {
        &self.attacked_by_us
    }

    /// Coordinates where our attack hit a ship.
    pub fn confirmed_hits(&self) -> &[Coordinate] {
        &self.confirmed_hits
    }

    pub fn was_attacked(&self, at: Coordinate) -> bool {
        self.attacked_by_us.contains(&at)
    }

    /// Attacks followed by hits: the seeds of the hunt expansion.
    pub fn history(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.attacked_by_us
            .iter()
            .chain(self.confirmed_hits.iter())
            .copied()
    }
}
