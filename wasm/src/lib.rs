//! WebAssembly module for the Drought Early Warning System
//!
//! Provides client-side computation for:
//! - Classifier feature derivation
//! - Risk scoring and outlook classification
//! - Vegetation indicator bands for the dashboard gauges

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"Drought early warning module loaded".into());
}

fn parse_observation(observation_json: &str) -> Result<Observation, JsValue> {
    let obs: Observation = serde_json::from_str(observation_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid observation JSON: {}", e)))?;

    if let Err(errors) = validate_observation(&obs) {
        let message = first_violation(&errors)
            .map(|(_, message)| message)
            .unwrap_or_else(|| "Invalid observation".to_string());
        return Err(JsValue::from_str(&message));
    }

    Ok(obs)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Derive the 11-element classifier feature vector, as JSON in model order
#[wasm_bindgen]
pub fn derive_feature_vector(observation_json: &str) -> Result<String, JsValue> {
    let obs = parse_observation(observation_json)?;
    to_json(&derive_features(&obs))
}

/// Feature names in the order the classifier expects
#[wasm_bindgen]
pub fn feature_names() -> String {
    FEATURE_NAMES.join(",")
}

/// Calculate the 0-15 drought risk score
#[wasm_bindgen]
pub fn calculate_risk_score(vci: f64, precip_current: f64, precip_3month: f64, ndvi: f64) -> u8 {
    score_risk(vci, precip_current, precip_3month, ndvi).score
}

/// Classify a risk score into its dashboard label
#[wasm_bindgen]
pub fn classify_risk_level(score: u8) -> String {
    format!("{}", RiskLevel::from_score(score))
}

/// Calculate the signed outlook trend score
#[wasm_bindgen]
pub fn calculate_trend_score(
    ndvi_trend: f64,
    precip_trend: f64,
    vci_trend: f64,
    dry_season: bool,
) -> i32 {
    let season = if dry_season { Season::Dry } else { Season::Rainy };
    forecast_outlook(ndvi_trend, precip_trend, vci_trend, season).score
}

/// Classify an outlook trend score
#[wasm_bindgen]
pub fn classify_outlook(score: i32) -> String {
    format!("{}", OutlookLevel::from_score(score))
}

#[wasm_bindgen]
pub fn classify_vegetation_status(vci: f64) -> String {
    format!("{}", VegetationStatus::from_vci(vci))
}

#[wasm_bindgen]
pub fn classify_ndvi_band(ndvi: f64) -> String {
    format!("{}", NdviBand::from_ndvi(ndvi))
}

/// Season label for a calendar month (1 = January)
#[wasm_bindgen]
pub fn season_for_month(month: u32) -> String {
    Season::for_month(month).label().to_string()
}

#[derive(Serialize)]
struct OfflineAssessment {
    features: FeatureVector,
    trends: TrendDeltas,
    risk: RiskAssessment,
    outlook: Outlook,
    indicators: VegetationIndicators,
}

/// Features, risk, outlook and indicators for one observation, computed
/// without the classifier
#[wasm_bindgen]
pub fn assess_observation(observation_json: &str) -> Result<String, JsValue> {
    let obs = parse_observation(observation_json)?;
    to_json(&OfflineAssessment {
        features: derive_features(&obs),
        trends: TrendDeltas::from_observation(&obs),
        risk: RiskAssessment::from_observation(&obs),
        outlook: Outlook::from_observation(&obs),
        indicators: VegetationIndicators::from_observation(&obs),
    })
}
