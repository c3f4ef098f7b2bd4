//! Serialized model artifact
//!
//! The artifact is a JSON document carrying the feature metadata and the
//! trained tree ensemble. It is produced offline by the training pipeline.
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "features": [{"name": "MedInc", "description": "...", "range": {"min": 0.5, "max": 15.0}}, ...],
//!   "target": {"name": "MedHouseVal", "description": "..."},
//!   "strict_ranges": false,
//!   "trees": [[{"split": {"feature": 0, "threshold": 5.0, "left": 1, "right": 2}}, {"leaf": {"value": 1.2}}, ...]]
//! }
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use crate::forest::RandomForest;
use model_spi::{FeatureDetail, ModelError, Result, TargetInfo, FEATURE_COUNT};

/// Artifact format understood by this crate
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Parsed model artifact
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub features: Vec<FeatureDetail>,
    pub target: TargetInfo,
    /// Reject inputs that fall outside the training range of any feature
    #[serde(default)]
    pub strict_ranges: bool,
    pub trees: RandomForest,
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| ModelError::Artifact(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check the invariants that serde cannot express
    ///
    /// Tree structure is already validated during deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::Artifact(format!(
                "unsupported format version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }

        if self.features.len() != FEATURE_COUNT {
            return Err(ModelError::Artifact(format!(
                "expected {} features, found {}",
                FEATURE_COUNT,
                self.features.len()
            )));
        }

        let mut seen = HashSet::new();
        for detail in &self.features {
            if detail.name.trim().is_empty() {
                return Err(ModelError::Artifact("feature name must not be empty".to_string()));
            }
            if !seen.insert(detail.name.as_str()) {
                return Err(ModelError::Artifact(format!(
                    "duplicate feature name '{}'",
                    detail.name
                )));
            }
            let range = detail.range;
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(ModelError::Artifact(format!(
                    "feature '{}' has an invalid range [{}, {}]",
                    detail.name, range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
