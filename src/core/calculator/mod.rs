pub mod duration;
pub mod metrics;
pub mod settlement;
pub mod summary;
