pub mod analyze;
pub mod audit;
pub mod lookup;
pub mod recommend;
