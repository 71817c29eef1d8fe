//! Agricultural Drought Early Warning System - Backend Server
//!
//! Serves drought-severity assessments for the Mekong Delta: classifier
//! features, a rule-based risk score, a short-term trend outlook and, when a
//! model endpoint is configured, the classifier's drought category.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use crate::config::Config;
use external::ModelClient;
use services::AssessmentService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assessments: AssessmentService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dews_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Drought Early Warning Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Region: {}, {}", config.region.name, config.region.country);

    let model_client = ModelClient::from_config(&config.model)?;
    match &model_client {
        Some(client) => tracing::info!("Drought model endpoint: {}", client.endpoint()),
        None => tracing::warn!("No drought model endpoint configured; predictions disabled"),
    }

    // Create application state
    let state = AppState {
        assessments: AssessmentService::with_client((&config.region).into(), model_client),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Agricultural Drought Early Warning System API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
