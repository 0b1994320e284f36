pub mod arrangement;
pub mod door;
pub mod host;
pub mod label;
pub mod outcome;
pub mod round;
pub mod strategy;
pub mod trial;
