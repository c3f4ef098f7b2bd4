//! Model Core
//!
//! Random Forest regression provider for the housing price model.
//!
//! - [`tree`]: flat-array regression trees with scikit-learn routing
//! - [`forest`]: averaging ensemble of regression trees
//! - [`artifact`]: the JSON model artifact and its structural validation
//! - [`provider`]: [`ForestModel`], the [`ModelProvider`] implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use model_core::ForestModel;
//! use model_spi::{FeatureVector, ModelProvider};
//! use std::path::Path;
//!
//! let model = ForestModel::load(Path::new("models/california_housing_rf.json"))?;
//! let features = FeatureVector::new([8.3252, 41.0, 6.984, 1.024, 322.0, 2.556, 37.88, -122.23]);
//! let price = model.predict(&features)?;
//! ```

pub mod artifact;
pub mod forest;
pub mod provider;
pub mod tree;

pub use artifact::{ModelArtifact, ARTIFACT_FORMAT_VERSION};
pub use forest::RandomForest;
pub use provider::ForestModel;
pub use tree::{Node, RegressionTree};

// Re-export the contract so implementations need a single import
pub use model_spi::{FeatureInfo, FeatureVector, ModelError, ModelProvider, Result};
