use super::arrangement::Arrangement;
use super::door::Door;
use super::label::Label;
use rand::seq::IndexedRandom;

/// Opens a goat door: never the contestant's pick, never the car.
///
/// When the pick hides the car, both remaining doors are goats and the host
/// chooses between them 50/50. Otherwise the single remaining goat door is
/// forced. This asymmetry is what tilts the odds toward switching.
pub fn reveal(
    arrangement: &Arrangement,
    pick: Door,
    rng: &mut impl rand::Rng,
) -> anyhow::Result<Door> {
    pick.others()
        .into_iter()
        .filter(|d| arrangement.behind(*d) == Label::Goat)
        .collect::<Vec<_>>()
        .choose(rng)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("no goat door to reveal in {} given pick {}", arrangement, pick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn never_pick_never_car() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for car in Door::ALL {
            let arrangement = Arrangement::from(car);
            for pick in Door::ALL {
                for _ in 0..100 {
                    let revealed = reveal(&arrangement, pick, rng).unwrap();
                    assert!(revealed != pick);
                    assert!(arrangement.behind(revealed) == Label::Goat);
                }
            }
        }
    }

    #[test]
    fn forced_when_pick_is_goat() {
        // car behind 2, pick 1: door 3 is the only legal reveal
        let ref mut rng = SmallRng::seed_from_u64(0);
        let arrangement = Arrangement::from(Door::Two);
        for _ in 0..100 {
            assert!(reveal(&arrangement, Door::One, rng).unwrap() == Door::Three);
        }
    }

    #[test]
    fn coinflip_when_pick_is_car() {
        // car behind 1, pick 1: both 2 and 3 must occur
        let ref mut rng = SmallRng::seed_from_u64(0);
        let arrangement = Arrangement::from(Door::One);
        let reveals = (0..1000)
            .map(|_| reveal(&arrangement, Door::One, rng).unwrap())
            .collect::<Vec<_>>();
        assert!(reveals.iter().any(|d| *d == Door::Two));
        assert!(reveals.iter().any(|d| *d == Door::Three));
        assert!(reveals.iter().all(|d| *d != Door::One));
    }
}
