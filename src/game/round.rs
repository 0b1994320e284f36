use super::arrangement::Arrangement;
use super::door::Door;
use super::host;
use super::strategy::Strategy;
use super::trial::Trial;

// ephemeral state of one full play-through: arrangement, initial pick, and
// reveal are drawn once and shared across both strategy evaluations, so each
// round is a paired comparison free of resampling noise between strategies
#[derive(Debug, Clone, Copy)]
pub struct Round {
    arrangement: Arrangement,
    pick: Door,
    revealed: Door,
}

impl Round {
    /// Set up one round: random arrangement, random initial pick, host
    /// reveal honoring the host constraints.
    pub fn new(rng: &mut impl rand::Rng) -> anyhow::Result<Self> {
        let arrangement = Arrangement::random_with(rng);
        let pick = Door::random_with(rng);
        let revealed = host::reveal(&arrangement, pick, rng)?;
        Ok(Self {
            arrangement,
            pick,
            revealed,
        })
    }

    /// Evaluate both strategies against this round's shared state. Always
    /// one Stay trial and one Switch trial.
    pub fn play(&self) -> anyhow::Result<[Trial; 2]> {
        Ok([
            self.evaluate(Strategy::Stay)?,
            self.evaluate(Strategy::Switch)?,
        ])
    }

    fn evaluate(&self, strategy: Strategy) -> anyhow::Result<Trial> {
        let door = strategy.decide(self.pick, self.revealed)?;
        Ok(Trial::from((strategy, self.arrangement.judge(door))))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "doors {} picked {} host opened {}",
            self.arrangement, self.pick, self.revealed
        )
    }
}
