pub mod batch;
pub mod confusion;
pub mod curve;

pub use confusion::ConfusionCounts;
pub use curve::RocPoint;
