//! Application state shared across handlers

use std::sync::Arc;

use model_facade::{FeatureInfo, FeatureVector, ModelProvider, Result};

use crate::pool::InferencePool;

/// Immutable model handle plus the pool its calls run on
#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn ModelProvider>,
    pool: InferencePool,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelProvider>, pool: InferencePool) -> Self {
        Self { model, pool }
    }

    pub fn pool(&self) -> &InferencePool {
        &self.pool
    }

    /// Fetch feature metadata on the inference pool
    pub async fn feature_info(&self) -> Result<FeatureInfo> {
        let model = Arc::clone(&self.model);
        self.pool.run(move || model.feature_info()).await
    }

    /// Run a prediction on the inference pool
    pub async fn predict(&self, features: FeatureVector) -> Result<f64> {
        let model = Arc::clone(&self.model);
        self.pool.run(move || model.predict(&features)).await
    }
}
