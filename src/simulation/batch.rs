use crate::game::outcome::Outcome;
use crate::game::round::Round;
use crate::game::strategy::Strategy;
use crate::game::trial::Trial;
use rayon::prelude::*;

/// All trials collected from a batch of rounds: 2n entries for n completed
/// rounds, one per strategy per round. Rounds share nothing, so any round
/// error is systemic and aborts the whole batch rather than being skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch(Vec<Trial>);

impl Batch {
    /// Run n rounds sequentially on the given random stream. n == 0 is
    /// defined and yields an empty batch. Checks the interrupt flag between
    /// rounds and returns early with the trials collected so far.
    pub fn run(n: usize, rng: &mut impl rand::Rng) -> anyhow::Result<Self> {
        let mut trials = Vec::with_capacity(n * 2);
        for i in 0..n {
            if crate::interrupted() {
                log::warn!("interrupted after {} of {} rounds", i, n);
                break;
            }
            trials.extend(Round::new(rng)?.play()?);
            if (i + 1) % crate::BATCH_LOG_INTERVAL == 0 {
                log::info!("completed {} / {} rounds", i + 1, n);
            }
        }
        Ok(Self(trials))
    }

    /// Run n rounds across rayon workers. Each round gets its own SmallRng
    /// stream split deterministically from the seed, so workers never share
    /// mutable RNG state and a given (seed, n) is reproducible.
    pub fn run_par(n: usize, seed: u64) -> anyhow::Result<Self> {
        use rand::SeedableRng;
        Ok(Self(
            (0..n as u64)
                .into_par_iter()
                .map(|i| {
                    let ref mut rng = rand::rngs::SmallRng::seed_from_u64(seed.wrapping_add(i));
                    Round::new(rng)?.play()
                })
                .collect::<anyhow::Result<Vec<_>>>()?
                .into_iter()
                .flatten()
                .collect(),
        ))
    }

    pub fn trials(&self) -> &[Trial] {
        &self.0
    }
    /// completed rounds (half the trial count)
    pub fn rounds(&self) -> usize {
        self.0.len() / 2
    }
    /// trials observed for a strategy (one per completed round)
    pub fn observations(&self, strategy: Strategy) -> usize {
        self.0.iter().filter(|t| t.strategy == strategy).count()
    }
    /// wins observed for a strategy
    pub fn wins(&self, strategy: Strategy) -> usize {
        self.0
            .iter()
            .filter(|t| t.strategy == strategy)
            .filter(|t| t.outcome == Outcome::Win)
            .count()
    }
}
