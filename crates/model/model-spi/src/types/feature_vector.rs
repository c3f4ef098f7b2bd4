//! Fixed-length model input

use serde::{Deserialize, Serialize};

use crate::error::LengthMismatch;

/// Number of features the model was trained on
pub const FEATURE_COUNT: usize = 8;

/// An ordered vector of exactly [`FEATURE_COUNT`] feature values
///
/// Order is significant and must match the model's trained feature order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Create a feature vector from a fixed-size array
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Feature values in trained order
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Iterate over the feature values
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Value at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = LengthMismatch;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| LengthMismatch {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self(array))
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = LengthMismatch;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(features: FeatureVector) -> Self {
        features.0.to_vec()
    }
}
