use super::outcome::Outcome;
use super::strategy::Strategy;

/// One (strategy, outcome) observation. A round yields two of these, one
/// per strategy, against the same game state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Trial {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl From<(Strategy, Outcome)> for Trial {
    fn from((strategy, outcome): (Strategy, Outcome)) -> Self {
        Self { strategy, outcome }
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<6} {}", self.strategy, self.outcome)
    }
}
