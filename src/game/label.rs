/// What a door hides: the car or a goat.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Label {
    Car,
    #[default]
    Goat,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Label::Car => "car",
            Label::Goat => "goat",
        })
    }
}
