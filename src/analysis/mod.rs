pub mod analyzer;
pub mod kit;
pub mod priority;

pub use self::analyzer::{analyze, labelled_abilities, AbilitySlot};
pub use self::kit::KitProfile;
pub use self::priority::{normalize, PriorityVector, RawScores};
