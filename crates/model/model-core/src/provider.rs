//! Random Forest model provider
//!
//! [`ForestModel`] is immutable once loaded and is safe to share across
//! worker threads behind an `Arc`.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::artifact::ModelArtifact;
use crate::forest::RandomForest;
use model_spi::{FeatureInfo, FeatureVector, ModelError, ModelProvider, Result};

/// Random Forest regressor loaded from a model artifact
#[derive(Debug, Clone)]
pub struct ForestModel {
    info: FeatureInfo,
    forest: RandomForest,
    strict_ranges: bool,
}

impl ForestModel {
    /// Build a model from an already parsed artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;
        Ok(Self {
            info: FeatureInfo::new(artifact.features, artifact.target),
            forest: artifact.trees,
            strict_ranges: artifact.strict_ranges,
        })
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }

    /// Whether out-of-range inputs are rejected
    pub fn strict_ranges(&self) -> bool {
        self.strict_ranges
    }

    fn check_input(&self, features: &FeatureVector) -> Result<()> {
        for (value, detail) in features.iter().zip(&self.info.feature_details) {
            if !value.is_finite() {
                return Err(ModelError::InvalidInput(format!(
                    "Feature '{}' must be a finite number",
                    detail.name
                )));
            }
            if self.strict_ranges && !detail.range.contains(*value) {
                return Err(ModelError::InvalidInput(format!(
                    "Feature '{}' value {} is outside the expected range [{}, {}]",
                    detail.name, value, detail.range.min, detail.range.max
                )));
            }
        }
        Ok(())
    }
}

impl ModelProvider for ForestModel {
    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let model = Self::from_artifact(ModelArtifact::from_json(&json)?)?;
        info!(
            path = %path.display(),
            trees = model.n_trees(),
            nodes = model.forest.n_nodes(),
            max_depth = model.forest.max_depth(),
            strict_ranges = model.strict_ranges,
            "Loaded random forest model"
        );
        Ok(model)
    }

    fn feature_info(&self) -> Result<FeatureInfo> {
        Ok(self.info.clone())
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.check_input(features)?;
        let prediction = self.forest.predict(features);
        if !prediction.is_finite() {
            return Err(ModelError::Internal(format!(
                "model produced a non-finite prediction ({})",
                prediction
            )));
        }
        debug!(prediction, "Computed prediction");
        Ok(prediction)
    }
}
