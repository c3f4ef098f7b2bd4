//! Value types exchanged across the provider boundary

mod feature_info;
mod feature_vector;

pub use feature_info::{FeatureDetail, FeatureInfo, FeatureRange, TargetInfo};
pub use feature_vector::{FeatureVector, FEATURE_COUNT};
