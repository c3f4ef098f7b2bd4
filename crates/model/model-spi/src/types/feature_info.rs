//! Feature metadata owned by the model provider

use serde::{Deserialize, Serialize};

/// Inclusive range of values observed for a feature during training
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    /// Whether `value` lies within the range, bounds included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Description of a single input feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDetail {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub range: FeatureRange,
}

/// Description of the predicted quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Read-only metadata describing the features a model was trained on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfo {
    /// Number of input features
    pub n_features: usize,
    /// Feature names in trained order
    pub feature_names: Vec<String>,
    /// Per-feature description and range
    pub feature_details: Vec<FeatureDetail>,
    /// Predicted quantity
    pub target: TargetInfo,
}

impl FeatureInfo {
    /// Build metadata from per-feature details; names and count are derived
    pub fn new(feature_details: Vec<FeatureDetail>, target: TargetInfo) -> Self {
        Self {
            n_features: feature_details.len(),
            feature_names: feature_details.iter().map(|d| d.name.clone()).collect(),
            feature_details,
            target,
        }
    }
}
