//! API route handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use model_facade::{FeatureInfo, FeatureVector, ModelError};

use crate::error::ApiError;
use crate::extract::{lenient_floats, JsonBody};
use crate::state::AppState;

pub const MODEL_TYPE: &str = "Random Forest Regressor";
pub const DATASET: &str = "California Housing Dataset";

const MODEL_INFO_ERROR: &str = "Error retrieving model information";
const PREDICTION_ERROR: &str = "Prediction error";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_type: &'static str,
    pub dataset: &'static str,
    pub features: FeatureInfo,
}

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    #[serde(deserialize_with = "lenient_floats")]
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub status: &'static str,
    pub features_used: Vec<f64>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Service is operational",
    })
}

pub async fn model_info(State(state): State<AppState>) -> Result<Json<ModelInfoResponse>, ApiError> {
    let features = state.feature_info().await.map_err(|e| {
        error!(error = %e, "Failed to retrieve model information");
        ApiError::Internal(MODEL_INFO_ERROR)
    })?;

    Ok(Json(ModelInfoResponse {
        model_type: MODEL_TYPE,
        dataset: DATASET,
        features,
    }))
}

pub async fn predict(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    // Shape is checked before the model is ever consulted
    let features = FeatureVector::try_from(request.features.as_slice())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match state.predict(features).await {
        Ok(prediction) if prediction.is_finite() => Ok(Json(PredictionResponse {
            prediction,
            status: "success",
            features_used: request.features,
        })),
        Ok(prediction) => {
            error!(prediction, "Model returned a non-finite prediction");
            Err(ApiError::Internal(PREDICTION_ERROR))
        }
        Err(ModelError::InvalidInput(message)) => {
            warn!(%message, "Model rejected feature values");
            Err(ApiError::BadRequest(message))
        }
        Err(e) => {
            error!(error = %e, "Prediction failed");
            Err(ApiError::Internal(PREDICTION_ERROR))
        }
    }
}
