pub mod analysis;
pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod explain;
pub mod loader;
pub mod model;
pub mod ranking;
pub mod recommender;
pub mod roster;
pub mod scorer;
pub mod taxonomy;

pub use api::recommend;
pub use error::{BfResult, BuildForgeError};
pub use model::{Ability, Character, Item, TeamComposition};
pub use ranking::RecommendationResult;
pub use recommender::{Analysis, Recommender, RecommenderParams};
// cmd and reports belong to the binary (main.rs).
