use super::door::Door;
use super::label::Label;
use super::outcome::Outcome;
use crate::Arbitrary;

/// The hidden assignment of labels to the three doors for one round.
///
/// Invariant: exactly one door hides the car. Guaranteed by construction,
/// since the only constructors place one car among default goats. Immutable
/// once created and discarded at round end.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Arrangement([Label; 3]);

/// arrangement with the car behind the given door
impl From<Door> for Arrangement {
    fn from(door: Door) -> Self {
        let mut labels = [Label::Goat; 3];
        labels[door as usize - 1] = Label::Car;
        Self(labels)
    }
}

impl Arrangement {
    /// uniform draw over the three possible car positions
    pub fn random_with(rng: &mut impl rand::Rng) -> Self {
        Self::from(Door::random_with(rng))
    }

    /// the label behind a door
    pub fn behind(&self, door: Door) -> Label {
        self.0[door as usize - 1]
    }

    /// which door hides the car
    pub fn car_door(&self) -> Door {
        Door::ALL
            .into_iter()
            .find(|d| self.behind(*d) == Label::Car)
            .expect("exactly one car")
    }

    /// classify a final pick. pure and total over valid doors
    pub fn judge(&self, door: Door) -> Outcome {
        match self.behind(door) {
            Label::Car => Outcome::Win,
            Label::Goat => Outcome::Lose,
        }
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}

impl Arbitrary for Arrangement {
    fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_car() {
        for _ in 0..1000 {
            let arrangement = Arrangement::random();
            let cars = Door::ALL
                .into_iter()
                .filter(|d| arrangement.behind(*d) == Label::Car)
                .count();
            assert!(cars == 1);
        }
    }

    #[test]
    fn car_door_round_trips() {
        for door in Door::ALL {
            assert!(Arrangement::from(door).car_door() == door);
        }
    }

    #[test]
    fn judge_is_pure() {
        let arrangement = Arrangement::from(Door::Two);
        for door in Door::ALL {
            assert!(arrangement.judge(door) == arrangement.judge(door));
        }
        assert!(arrangement.judge(Door::Two) == Outcome::Win);
        assert!(arrangement.judge(Door::One) == Outcome::Lose);
    }
}
