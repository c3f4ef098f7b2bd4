//! Error types for model provider operations
//!
//! This module provides the [`ModelError`] enum and [`Result`] type alias
//! shared by every provider implementation, plus [`LengthMismatch`] for
//! feature vectors of the wrong shape.

mod model_error;

pub use model_error::{LengthMismatch, ModelError, Result};
