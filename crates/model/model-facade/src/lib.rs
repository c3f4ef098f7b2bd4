//! Model Facade
//!
//! High-level API for the housing price model. Re-exports all public types
//! from the model stack for convenient usage.

// Re-export everything from core (which includes the SPI contract)
pub use model_core::*;

// Explicit re-exports for documentation
pub use model_spi::{
    FeatureDetail, FeatureRange, LengthMismatch, TargetInfo, FEATURE_COUNT,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use model_core::{ForestModel, ModelArtifact};
    pub use model_spi::{FeatureInfo, FeatureVector, ModelError, ModelProvider, Result};
}
