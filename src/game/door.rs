use crate::Arbitrary;
use rand::seq::IndexedRandom;

/// 1-indexed door position. A closed enum, so out-of-range indices are
/// unrepresentable downstream of construction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Door {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Door {
    pub const ALL: [Self; 3] = [Door::One, Door::Two, Door::Three];

    /// the two doors that are not this one
    pub fn others(&self) -> [Self; 2] {
        match self {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }

    /// uniform draw from the three doors
    pub fn random_with(rng: &mut impl rand::Rng) -> Self {
        *Self::ALL.choose(rng).expect("non-empty")
    }
}

/// u8 isomorphism over the printed door numbers 1..=3
impl From<Door> for u8 {
    fn from(d: Door) -> u8 {
        d as u8
    }
}
impl TryFrom<u8> for Door {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Door::One),
            2 => Ok(Door::Two),
            3 => Ok(Door::Three),
            _ => Err(anyhow::anyhow!("invalid door index: {}", n)),
        }
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl Arbitrary for Door {
    fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for door in Door::ALL {
            assert!(door == Door::try_from(u8::from(door)).unwrap());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Door::try_from(0).is_err());
        assert!(Door::try_from(4).is_err());
    }

    #[test]
    fn others_exclude_self() {
        for door in Door::ALL {
            assert!(door.others().iter().all(|d| *d != door));
        }
    }
}
