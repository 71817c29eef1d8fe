//! Drought categories and classifier output

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of drought categories the classifier predicts
pub const CATEGORY_COUNT: usize = 5;

/// Five-level drought severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DroughtCategory {
    NoDrought,
    LightDrought,
    ModerateDrought,
    SevereDrought,
    ExtremeDrought,
}

impl DroughtCategory {
    /// Categories in classifier index order
    pub const ALL: [DroughtCategory; CATEGORY_COUNT] = [
        DroughtCategory::NoDrought,
        DroughtCategory::LightDrought,
        DroughtCategory::ModerateDrought,
        DroughtCategory::SevereDrought,
        DroughtCategory::ExtremeDrought,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn code(&self) -> &'static str {
        match self {
            DroughtCategory::NoDrought => "no_drought",
            DroughtCategory::LightDrought => "light_drought",
            DroughtCategory::ModerateDrought => "moderate_drought",
            DroughtCategory::SevereDrought => "severe_drought",
            DroughtCategory::ExtremeDrought => "extreme_drought",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DroughtCategory::NoDrought => "No Drought",
            DroughtCategory::LightDrought => "Light Drought",
            DroughtCategory::ModerateDrought => "Moderate Drought",
            DroughtCategory::SevereDrought => "Severe Drought",
            DroughtCategory::ExtremeDrought => "Extreme Drought",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DroughtCategory::NoDrought => {
                "Normal vegetation conditions with adequate rainfall patterns"
            }
            DroughtCategory::LightDrought => {
                "Minor stress on vegetation with slightly below normal rainfall"
            }
            DroughtCategory::ModerateDrought => {
                "Moderate vegetation stress with significant rainfall deficit"
            }
            DroughtCategory::SevereDrought => {
                "Severe vegetation stress with prolonged rainfall deficit"
            }
            DroughtCategory::ExtremeDrought => {
                "Extreme vegetation stress with critical water shortage conditions"
            }
        }
    }
}

impl std::fmt::Display for DroughtCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output that does not fit the five-category contract
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("expected {expected} probabilities, got {actual}")]
    ProbabilityCount { expected: usize, actual: usize },

    #[error("category index {0} is out of range")]
    CategoryOutOfRange(usize),

    #[error("probability for category {index} is invalid: {value}")]
    InvalidProbability { index: usize, value: f64 },
}

/// Predicted category and per-category probabilities from the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ModelPrediction {
    pub category: DroughtCategory,
    pub probabilities: [f64; CATEGORY_COUNT],
}

/// One bar of the probability distribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryProbability {
    pub category: DroughtCategory,
    pub percent: f64,
}

impl ModelPrediction {
    /// Check raw classifier output against the category contract
    pub fn new(index: usize, probabilities: &[f64]) -> Result<Self, PredictionError> {
        let category =
            DroughtCategory::from_index(index).ok_or(PredictionError::CategoryOutOfRange(index))?;

        let probabilities: [f64; CATEGORY_COUNT] =
            probabilities
                .try_into()
                .map_err(|_| PredictionError::ProbabilityCount {
                    expected: CATEGORY_COUNT,
                    actual: probabilities.len(),
                })?;

        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(PredictionError::InvalidProbability { index, value });
        }

        Ok(Self {
            category,
            probabilities,
        })
    }

    /// Probability of the predicted category, as a percentage
    pub fn confidence_percent(&self) -> f64 {
        self.probabilities[self.category.index()] * 100.0
    }

    pub fn distribution(&self) -> Vec<CategoryProbability> {
        DroughtCategory::ALL
            .iter()
            .zip(self.probabilities)
            .map(|(&category, p)| CategoryProbability {
                category,
                percent: p * 100.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_index_round_trip() {
        for (i, category) in DroughtCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(DroughtCategory::from_index(i), Some(*category));
        }
        assert_eq!(DroughtCategory::from_index(5), None);
    }

    #[test]
    fn test_prediction_confidence() {
        let prediction = ModelPrediction::new(2, &[0.05, 0.15, 0.6, 0.15, 0.05]).unwrap();
        assert_eq!(prediction.category, DroughtCategory::ModerateDrought);
        assert!((prediction.confidence_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_rejects_wrong_length() {
        let err = ModelPrediction::new(0, &[0.5, 0.5]).unwrap_err();
        assert_eq!(
            err,
            PredictionError::ProbabilityCount {
                expected: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn test_prediction_rejects_bad_index() {
        let err = ModelPrediction::new(7, &[0.2; 5]).unwrap_err();
        assert_eq!(err, PredictionError::CategoryOutOfRange(7));
    }

    #[test]
    fn test_prediction_rejects_negative_probability() {
        let err = ModelPrediction::new(0, &[0.9, -0.1, 0.1, 0.05, 0.05]).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidProbability { index: 1, .. }));
    }

    #[test]
    fn test_distribution_in_index_order() {
        let prediction = ModelPrediction::new(0, &[0.7, 0.2, 0.1, 0.0, 0.0]).unwrap();
        let dist = prediction.distribution();
        assert_eq!(dist.len(), 5);
        assert_eq!(dist[0].category, DroughtCategory::NoDrought);
        assert!((dist[1].percent - 20.0).abs() < 1e-9);
    }
}
