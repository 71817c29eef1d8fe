//! Route definitions for the Drought Early Warning System

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/categories", get(handlers::list_categories))
        .route("/features", post(handlers::derive_feature_vector))
        .route("/risk", post(handlers::score_risk))
        .route("/outlook", post(handlers::forecast_outlook))
        .route("/predictions", post(handlers::predict_category))
        .route("/assessments", post(handlers::create_assessment))
}
