//! Drought assessment service combining the rule-based scores with the model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    derive_features, first_violation, outlook_components, risk_components,
    validate_finite, validate_observation, CategoryProbability, DroughtCategory, FeatureVector,
    ModelPrediction, Observation, Outlook, OutlookLevel, Region, RiskAssessment, RiskComponents,
    RiskLevel, Season, TrendComponents, TrendDeltas, VegetationIndicators, MAX_RISK_SCORE,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::ModelClient;

/// Drought assessment service
#[derive(Clone)]
pub struct AssessmentService {
    region: Region,
    model_client: Option<ModelClient>,
}

/// Raw signals for the risk score
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RiskInput {
    pub vci: f64,
    pub precip_current: f64,
    pub precip_3month: f64,
    pub ndvi: f64,
}

/// Trend signals for the outlook
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OutlookInput {
    pub ndvi_trend: f64,
    pub precip_trend: f64,
    pub vci_trend: f64,
    pub season: Season,
}

/// Risk score with its per-signal breakdown
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub score: u8,
    pub max_score: u8,
    pub level: RiskLevel,
    pub label: String,
    pub components: RiskComponents,
}

impl From<RiskComponents> for RiskReport {
    fn from(components: RiskComponents) -> Self {
        let risk = RiskAssessment::from(components);
        Self {
            score: risk.score,
            max_score: MAX_RISK_SCORE,
            level: risk.level,
            label: risk.level.to_string(),
            components,
        }
    }
}

/// Outlook with its per-signal breakdown
#[derive(Debug, Clone, Serialize)]
pub struct OutlookReport {
    pub score: i32,
    pub level: OutlookLevel,
    pub label: String,
    pub components: TrendComponents,
}

impl From<TrendComponents> for OutlookReport {
    fn from(components: TrendComponents) -> Self {
        let outlook = Outlook::from(components);
        Self {
            score: outlook.score,
            level: outlook.level,
            label: outlook.level.to_string(),
            components,
        }
    }
}

/// Classifier result as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct PredictionSummary {
    pub category: DroughtCategory,
    pub label: String,
    pub description: String,
    pub confidence_percent: f64,
    pub distribution: Vec<CategoryProbability>,
}

impl From<ModelPrediction> for PredictionSummary {
    fn from(prediction: ModelPrediction) -> Self {
        Self {
            category: prediction.category,
            label: prediction.category.label().to_string(),
            description: prediction.category.description().to_string(),
            confidence_percent: prediction.confidence_percent(),
            distribution: prediction.distribution(),
        }
    }
}

/// Full assessment of one observation
#[derive(Debug, Clone, Serialize)]
pub struct DroughtAssessment {
    pub assessment_id: Uuid,
    pub region: Region,
    pub season: Season,
    pub season_label: String,
    pub features: FeatureVector,
    pub trends: TrendDeltas,
    pub risk: RiskReport,
    pub outlook: OutlookReport,
    pub indicators: VegetationIndicators,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionSummary>,
    pub assessed_at: DateTime<Utc>,
}

/// Reference entry for one drought category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub index: usize,
    pub code: String,
    pub label: String,
    pub description: String,
}

impl AssessmentService {
    /// Create a new AssessmentService instance
    pub fn new(region: Region) -> Self {
        Self {
            region,
            model_client: None,
        }
    }

    /// Create a new AssessmentService with a drought model client
    pub fn with_client(region: Region, model_client: Option<ModelClient>) -> Self {
        Self {
            region,
            model_client,
        }
    }

    pub fn has_model(&self) -> bool {
        self.model_client.is_some()
    }

    /// Derive the classifier feature vector for a validated observation
    pub fn features(&self, obs: &Observation) -> AppResult<FeatureVector> {
        check_observation(obs)?;
        Ok(derive_features(obs))
    }

    pub fn risk(&self, input: RiskInput) -> AppResult<RiskReport> {
        validate_finite(&[
            ("vci", input.vci),
            ("precip_current", input.precip_current),
            ("precip_3month", input.precip_3month),
            ("ndvi", input.ndvi),
        ])
        .map_err(not_finite)?;

        Ok(risk_components(input.vci, input.precip_current, input.precip_3month, input.ndvi).into())
    }

    pub fn outlook(&self, input: OutlookInput) -> AppResult<OutlookReport> {
        validate_finite(&[
            ("ndvi_trend", input.ndvi_trend),
            ("precip_trend", input.precip_trend),
            ("vci_trend", input.vci_trend),
        ])
        .map_err(not_finite)?;

        Ok(outlook_components(
            input.ndvi_trend,
            input.precip_trend,
            input.vci_trend,
            input.season,
        )
        .into())
    }

    /// Classify an observation with the remote model
    pub async fn predict(&self, obs: &Observation) -> AppResult<PredictionSummary> {
        check_observation(obs)?;
        let client = self
            .model_client
            .as_ref()
            .ok_or(AppError::ModelNotConfigured)?;

        let features = derive_features(obs);
        let prediction = client.predict(Uuid::new_v4(), &features).await?;
        Ok(prediction.into())
    }

    /// Run the full assessment for an observation.
    ///
    /// The rule-based risk score and outlook are always returned. The model
    /// prediction is included only when a model endpoint is configured and
    /// the call succeeds; a failed call is logged and the prediction omitted.
    pub async fn assess(&self, obs: &Observation) -> AppResult<DroughtAssessment> {
        check_observation(obs)?;

        let assessment_id = Uuid::new_v4();
        let features = derive_features(obs);
        tracing::debug!(%assessment_id, ?features, "Derived classifier features");

        let trends = TrendDeltas::from_observation(obs);
        let risk = RiskReport::from(risk_components(
            obs.vci,
            obs.precip_current,
            obs.precip_3month,
            obs.ndvi,
        ));
        let outlook = OutlookReport::from(outlook_components(
            trends.ndvi_trend,
            trends.precip_trend,
            trends.vci_trend,
            obs.season,
        ));

        let prediction = match &self.model_client {
            Some(client) => match client.predict(assessment_id, &features).await {
                Ok(prediction) => Some(prediction.into()),
                Err(e) => {
                    tracing::warn!(%assessment_id, error = %e, "Drought model call failed, omitting prediction");
                    None
                }
            },
            None => {
                tracing::warn!(%assessment_id, "Drought model not configured, skipping prediction");
                None
            }
        };

        let assessment = DroughtAssessment {
            assessment_id,
            region: self.region.clone(),
            season: obs.season,
            season_label: obs.season.label().to_string(),
            features,
            trends,
            risk,
            outlook,
            indicators: VegetationIndicators::from_observation(obs),
            prediction,
            assessed_at: Utc::now(),
        };

        tracing::info!(
            %assessment_id,
            risk_score = assessment.risk.score,
            risk_level = assessment.risk.level.as_str(),
            outlook = %assessment.outlook.level,
            category = assessment.prediction.as_ref().map(|p| p.category.code()),
            "Drought assessment completed"
        );

        Ok(assessment)
    }

    /// All drought categories in classifier order
    pub fn categories(&self) -> Vec<CategoryInfo> {
        DroughtCategory::ALL
            .iter()
            .map(|c| CategoryInfo {
                index: c.index(),
                code: c.code().to_string(),
                label: c.label().to_string(),
                description: c.description().to_string(),
            })
            .collect()
    }
}

/// Map domain violations to the first failing field
fn check_observation(obs: &Observation) -> AppResult<()> {
    validate_observation(obs).map_err(|errors| match first_violation(&errors) {
        Some((field, message)) => AppError::Validation {
            field: field.to_string(),
            message,
            message_vi: format!("Giá trị của {} nằm ngoài phạm vi cho phép", field),
        },
        None => AppError::ValidationError(errors.to_string()),
    })
}

fn not_finite(field: &'static str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        message: format!("{} must be a finite number", field),
        message_vi: format!("{} phải là một số hữu hạn", field),
    }
}
