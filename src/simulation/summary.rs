use super::batch::Batch;
use crate::Probability;
use crate::game::strategy::Strategy;
use colored::Colorize;

/// Win/lose tallies for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub strategy: Strategy,
    pub wins: usize,
    pub losses: usize,
}

impl Row {
    /// win proportion, rounded to two decimals. zero for an unobserved row
    pub fn p_win(&self) -> Probability {
        match self.wins + self.losses {
            0 => 0.,
            n => Self::round(self.wins as Probability / n as Probability),
        }
    }
    /// lose proportion, rounded to two decimals. zero for an unobserved row
    pub fn p_lose(&self) -> Probability {
        match self.wins + self.losses {
            0 => 0.,
            n => Self::round(self.losses as Probability / n as Probability),
        }
    }
    fn round(p: Probability) -> Probability {
        (p * 100.).round() / 100.
    }
}

/// Per-strategy distribution over win/lose, each row summing to 1. Built
/// purely from a Batch; printing is the caller's explicit step, never a
/// side effect of running the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary(Vec<Row>);

impl From<&Batch> for Summary {
    fn from(batch: &Batch) -> Self {
        Self(
            Strategy::ALL
                .into_iter()
                .filter(|s| batch.observations(*s) > 0)
                .map(|s| Row {
                    strategy: s,
                    wins: batch.wins(s),
                    losses: batch.observations(s) - batch.wins(s),
                })
                .collect(),
        )
    }
}

impl Summary {
    pub fn rows(&self) -> &[Row] {
        &self.0
    }
    /// (win, lose) proportions for a strategy, if observed
    pub fn proportions(&self, strategy: Strategy) -> Option<(Probability, Probability)> {
        self.0
            .iter()
            .find(|r| r.strategy == strategy)
            .map(|r| (r.p_win(), r.p_lose()))
    }
    fn best(&self) -> Option<Strategy> {
        self.0
            .iter()
            .max_by(|a, b| a.p_win().partial_cmp(&b.p_win()).expect("not NaN"))
            .map(|r| r.strategy)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8} {:>6} {:>6}", "strategy", "win", "lose")?;
        for row in self.0.iter() {
            let cells = format!("{:<8} {:>6.2} {:>6.2}", row.strategy, row.p_win(), row.p_lose());
            if Some(row.strategy) == self.best() {
                write!(f, "\n{}", cells.green())?;
            } else {
                write!(f, "\n{}", cells)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rows_sum_to_one() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let batch = Batch::run(300, rng).unwrap();
        let summary = Summary::from(&batch);
        for strategy in Strategy::ALL {
            let (win, lose) = summary.proportions(strategy).unwrap();
            assert!((win + lose - 1.0).abs() < 0.011); // rounding slack
        }
    }

    #[test]
    fn rounded_to_two_decimals() {
        // 1 win in 3 rounds the stay row reads 0.33, not 1/3
        let row = Row {
            strategy: Strategy::Stay,
            wins: 1,
            losses: 2,
        };
        assert!(row.p_win() == 0.33);
        assert!(row.p_lose() == 0.67);
    }

    #[test]
    fn unobserved_row_is_finite() {
        // wins + losses == 0 must not divide by zero into NaN
        let row = Row {
            strategy: Strategy::Stay,
            wins: 0,
            losses: 0,
        };
        assert!(row.p_win() == 0.);
        assert!(row.p_lose() == 0.);
    }

    #[test]
    fn empty_batch_empty_summary() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let batch = Batch::run(0, rng).unwrap();
        let summary = Summary::from(&batch);
        assert!(summary.rows().is_empty());
        assert!(summary.proportions(Strategy::Switch).is_none());
    }
}
