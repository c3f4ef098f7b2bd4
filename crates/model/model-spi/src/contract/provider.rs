//! Model provider trait
//!
//! A provider wraps an already-trained regression model. It is loaded once,
//! then shared read-only across every request for the lifetime of the
//! process.

use std::path::Path;

use crate::error::Result;
use crate::types::{FeatureInfo, FeatureVector};

/// Contract for a trained regression model
///
/// Implementations must be immutable after [`ModelProvider::load`] so they
/// can be shared behind an `Arc` and called from several worker threads at
/// once without locking.
///
/// # Example
///
/// ```rust,ignore
/// use model_spi::{FeatureVector, ModelProvider};
///
/// fn price<P: ModelProvider>(model: &P, values: &[f64]) -> model_spi::Result<f64> {
///     let features = FeatureVector::try_from(values)
///         .map_err(|e| model_spi::ModelError::InvalidInput(e.to_string()))?;
///     model.predict(&features)
/// }
/// ```
pub trait ModelProvider: Send + Sync {
    /// Load the model from a serialized artifact
    fn load(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Metadata describing the features the model was trained on
    fn feature_info(&self) -> Result<FeatureInfo>;

    /// Predict the target value for a single feature vector
    ///
    /// Returns [`crate::ModelError::InvalidInput`] when the values are
    /// unacceptable to the model; any other error kind is a provider fault.
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}
