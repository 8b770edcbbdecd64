pub use super::roc::batch::run_jobs;
pub use super::roc::confusion::ConfusionCounts;
pub use super::roc::curve::{curve_json, sort_by_fpr, trapezoid_auc, RocPoint};
