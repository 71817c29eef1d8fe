//! HTTP handlers for drought assessment endpoints

use axum::{extract::State, Json};
use shared::{FeatureVector, Observation};

use crate::error::AppResult;
use crate::services::assessment::{
    CategoryInfo, DroughtAssessment, OutlookInput, OutlookReport, PredictionSummary, RiskInput,
    RiskReport,
};
use crate::AppState;

/// Run the full assessment for an observation
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(observation): Json<Observation>,
) -> AppResult<Json<DroughtAssessment>> {
    let assessment = state.assessments.assess(&observation).await?;
    Ok(Json(assessment))
}

/// Derive the classifier feature vector
pub async fn derive_feature_vector(
    State(state): State<AppState>,
    Json(observation): Json<Observation>,
) -> AppResult<Json<FeatureVector>> {
    let features = state.assessments.features(&observation)?;
    Ok(Json(features))
}

/// Rule-based risk score from raw signals
pub async fn score_risk(
    State(state): State<AppState>,
    Json(input): Json<RiskInput>,
) -> AppResult<Json<RiskReport>> {
    let report = state.assessments.risk(input)?;
    Ok(Json(report))
}

/// Trend outlook from trend signals
pub async fn forecast_outlook(
    State(state): State<AppState>,
    Json(input): Json<OutlookInput>,
) -> AppResult<Json<OutlookReport>> {
    let report = state.assessments.outlook(input)?;
    Ok(Json(report))
}

/// Model prediction only
pub async fn predict_category(
    State(state): State<AppState>,
    Json(observation): Json<Observation>,
) -> AppResult<Json<PredictionSummary>> {
    let prediction = state.assessments.predict(&observation).await?;
    Ok(Json(prediction))
}

/// Drought category reference table
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryInfo>> {
    Json(state.assessments.categories())
}
