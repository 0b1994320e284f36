use super::door::Door;

/// Contestant policy applied after the reveal: keep the original pick or
/// switch to the remaining closed door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Strategy::Stay, Strategy::Switch];

    /// Resolve the final pick. Staying returns the original pick; switching
    /// returns the unique door that is neither the pick nor the reveal.
    /// A non-unique candidate set means the pick and reveal collided
    /// upstream, which is an invariant violation.
    pub fn decide(&self, pick: Door, revealed: Door) -> anyhow::Result<Door> {
        match self {
            Strategy::Stay => Ok(pick),
            Strategy::Switch => {
                let mut rest = Door::ALL
                    .into_iter()
                    .filter(|d| *d != pick && *d != revealed);
                match (rest.next(), rest.next()) {
                    (Some(door), None) => Ok(door),
                    _ => Err(anyhow::anyhow!(
                        "no unique door besides pick {} and reveal {}",
                        pick,
                        revealed
                    )),
                }
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        })
    }
}
