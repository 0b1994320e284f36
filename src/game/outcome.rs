/// Result of one strategy's play-through: did the final pick hide the car.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        })
    }
}
