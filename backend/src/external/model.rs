//! Drought Model Client
//!
//! Client for the remote drought classifier. The serving endpoint owns both
//! the fitted scaler and the classifier: it scales the feature row it
//! receives, then returns the predicted category and the per-category
//! probabilities.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{FeatureVector, ModelPrediction, FEATURE_NAMES};
use uuid::Uuid;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

/// Client for the drought classification endpoint
#[derive(Clone)]
pub struct ModelClient {
    api_endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

/// Request to classify one feature row
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub request_id: Uuid,
    pub feature_names: [&'static str; 11],
    pub features: [f64; 11],
}

impl PredictRequest {
    pub fn new(request_id: Uuid, features: &FeatureVector) -> Self {
        Self {
            request_id,
            feature_names: FEATURE_NAMES,
            features: features.to_array(),
        }
    }
}

/// Raw response from the classification endpoint
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub prediction: usize,
    pub probabilities: Vec<f64>,
}

impl TryFrom<PredictResponse> for ModelPrediction {
    type Error = AppError;

    fn try_from(r: PredictResponse) -> Result<Self, Self::Error> {
        Ok(ModelPrediction::new(r.prediction, &r.probabilities)?)
    }
}

impl ModelClient {
    /// Create a new drought model client
    pub fn new(api_endpoint: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Create a client from configuration, if an endpoint is set
    pub fn from_config(config: &ModelConfig) -> AppResult<Option<Self>> {
        match &config.endpoint {
            Some(endpoint) => Self::new(
                endpoint.clone(),
                config.api_key.clone(),
                Duration::from_secs(config.timeout_secs),
            )
            .map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Classify a feature row
    pub async fn predict(
        &self,
        request_id: Uuid,
        features: &FeatureVector,
    ) -> AppResult<ModelPrediction> {
        let mut request = self
            .http_client
            .post(&self.api_endpoint)
            .header("Content-Type", "application/json")
            .json(&PredictRequest::new(request_id, features));

        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ModelServiceError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelServiceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelServiceError(format!("Failed to parse response: {}", e)))?;

        result.try_into()
    }
}
