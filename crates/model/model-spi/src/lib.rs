//! Model Provider Service Provider Interface
//!
//! Defines the contract between the prediction service and a trained
//! regression model:
//!
//! - [`ModelProvider`]: load, feature metadata and single-point prediction
//! - [`FeatureVector`]: the fixed-length, order-significant model input
//! - [`FeatureInfo`]: read-only metadata describing the trained features
//! - [`ModelError`]: the closed set of failure kinds a provider may report
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod types;

// Re-export all public items at crate root for convenience
pub use contract::ModelProvider;
pub use error::{LengthMismatch, ModelError, Result};
pub use types::{FeatureDetail, FeatureInfo, FeatureRange, FeatureVector, TargetInfo, FEATURE_COUNT};
